use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::CycleError;

/// Byte buffer with a hard capacity.
///
/// `push` refuses to grow past the capacity, so an oversized payload
/// surfaces as an overflow result instead of an out-of-bounds write or a
/// silent truncation. `clear` keeps the allocation so one buffer serves
/// every cycle.
#[derive(Debug)]
pub struct BoundedBuf {
    bytes: Vec<u8>,
    capacity: usize,
}

impl BoundedBuf {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, b: u8) -> Result<(), CycleError> {
        if self.bytes.len() == self.capacity {
            return Err(CycleError::BufferOverflow {
                capacity: self.capacity,
            });
        }
        self.bytes.push(b);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

/// Isolate the outermost balanced `{...}` object from `reader` into `out`,
/// discarding everything outside the braces (status line, headers, trailing
/// bytes). Reads until the peer closes the stream.
///
/// Depth counting ignores string literals: a quoted `{` or `}` inside a
/// value would skew the count. Observed names are not expected to contain
/// braces, so this stays a plain byte scan.
pub async fn extract_object<R>(mut reader: R, out: &mut BoundedBuf) -> Result<(), CycleError>
where
    R: AsyncRead + Unpin,
{
    out.clear();
    let mut depth: i32 = 0;
    let mut chunk = [0u8; 1024];

    loop {
        let n = reader.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        for &b in &chunk[..n] {
            if b == b'{' {
                depth += 1;
            }
            if depth > 0 {
                out.push(b)?;
            }
            // Decrement after the append so the brace that closes the
            // outermost object is still part of the output.
            if b == b'}' {
                depth -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn extract_str(input: &str, capacity: usize) -> Result<String, CycleError> {
        let mut buf = BoundedBuf::with_capacity(capacity);
        extract_object(input.as_bytes(), &mut buf).await?;
        Ok(String::from_utf8(buf.as_slice().to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_strips_headers_and_trailer() {
        let input = "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\n\r\n{\"players\":{\"online\":2,\"sample\":[{\"name\":\"Alice\"}]}}trailing-garbage";
        assert_eq!(
            extract_str(input, 4096).await.unwrap(),
            "{\"players\":{\"online\":2,\"sample\":[{\"name\":\"Alice\"}]}}"
        );
    }

    #[tokio::test]
    async fn test_nested_objects_and_arrays() {
        let input = "noise {\"a\":{\"b\":[{\"c\":1},{\"d\":2}]},\"e\":3} more noise";
        assert_eq!(
            extract_str(input, 4096).await.unwrap(),
            "{\"a\":{\"b\":[{\"c\":1},{\"d\":2}]},\"e\":3}"
        );
    }

    #[tokio::test]
    async fn test_no_object_yields_empty() {
        assert_eq!(extract_str("just some text, no json", 64).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_overflow_is_reported_not_truncated() {
        let input = "{\"key\":\"a value that does not fit\"}";
        match extract_str(input, 8).await {
            Err(CycleError::BufferOverflow { capacity: 8 }) => {}
            other => panic!("expected BufferOverflow, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_buffer_reuse_across_cycles() {
        let mut buf = BoundedBuf::with_capacity(64);
        extract_object("x{\"a\":1}y".as_bytes(), &mut buf).await.unwrap();
        assert_eq!(buf.as_slice(), b"{\"a\":1}");
        extract_object("z{\"b\":2}".as_bytes(), &mut buf).await.unwrap();
        assert_eq!(buf.as_slice(), b"{\"b\":2}");
    }
}
