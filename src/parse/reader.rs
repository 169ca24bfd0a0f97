use std::io::Error as IoError;

#[cfg(not(any(feature = "async_std", feature = "async_tokio")))]
use std::io::Read;

#[cfg(feature = "async_tokio")]
use tokio::io::{AsyncRead, AsyncReadExt};

#[cfg(feature = "async_std")]
use async_std::io::{Read, ReadExt};

const INITIAL_CAPACITY: usize = 16 * 1024;

#[cfg(not(any(feature = "async_std", feature = "async_tokio")))]
pub(crate) fn read_all<R: Read>(mut src: R) -> Result<Vec<u8>, IoError> {
    let mut buf = Vec::with_capacity(INITIAL_CAPACITY);
    src.read_to_end(&mut buf)?;

    Ok(buf)
}

#[cfg(feature = "async_tokio")]
pub(crate) async fn read_all<R: AsyncRead + Unpin>(mut src: R) -> Result<Vec<u8>, IoError> {
    let mut buf = Vec::with_capacity(INITIAL_CAPACITY);
    src.read_to_end(&mut buf).await?;

    Ok(buf)
}

#[cfg(feature = "async_std")]
pub(crate) async fn read_all<R: Read + Unpin>(mut src: R) -> Result<Vec<u8>, IoError> {
    let mut buf = Vec::with_capacity(INITIAL_CAPACITY);
    src.read_to_end(&mut buf).await?;

    Ok(buf)
}
