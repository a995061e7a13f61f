//! Verifying many signed URLs at once on the rayon thread pool.
use rayon::prelude::*;

use crate::error::VerificationError;
use crate::signer::UrlSigner;

/// Batch verifies a collection of signed URLs, failing if any of them fails.
///
/// When several URLs are bad, which error is returned is unspecified. Use
/// [`par_verify_each`] to learn the outcome of every URL.
///
/// # Example
///```
///use signed_url::{par_verify, SecretKey, UrlSigner};
///
///let signer = UrlSigner::new(SecretKey::generate()).unwrap();
///let urls = (0..100)
///    .map(|id| signer.sign(&format!("https://example.com/unsubscribe?id={}", id), None))
///    .collect::<Result<Vec<_>, _>>()
///    .unwrap();
///assert!(par_verify(&signer, &urls).is_ok());
///```
pub fn par_verify<T: AsRef<str>>(signer: &UrlSigner, urls: &[T]) -> Result<(), VerificationError>
where
    [T]: ParallelSlice<T>,
    T: Sync,
{
    urls.par_iter()
        .try_fold(|| (), |_, url| signer.verify(url.as_ref()))
        .try_reduce(|| (), |_, _| Ok(()))
}

/// Verifies every URL and returns one outcome per URL, in input order.
pub fn par_verify_each<T: AsRef<str>>(
    signer: &UrlSigner,
    urls: &[T],
) -> Vec<Result<(), VerificationError>>
where
    [T]: ParallelSlice<T>,
    T: Sync,
{
    urls.par_iter().map(|url| signer.verify(url.as_ref())).collect()
}
