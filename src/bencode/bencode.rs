use num_bigint::BigInt;
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::bencode::enums::decode_error::DecodeError;
use crate::bencode::enums::decode_frame::DecodeFrame;

pub fn encode(value: &BencodeValue) -> Vec<u8>
{
    value.encode()
}

/// Decodes exactly one bencode value spanning the whole of `data`.
pub fn decode(data: &[u8]) -> Result<BencodeValue, DecodeError>
{
    let mut stack: Vec<DecodeFrame> = Vec::new();
    let mut position = 0usize;

    loop {
        let start = position;
        let Some(&tag) = data.get(position) else {
            return Err(DecodeError::UnterminatedValue {
                position: stack.last().map(DecodeFrame::position).unwrap_or(position)
            });
        };

        let value = match tag {
            b'i' => {
                let (value, next) = decode_integer(data, position)?;
                position = next;
                value
            }
            b'0'..=b'9' => {
                let (bytes, next) = decode_byte_string(data, position)?;
                position = next;
                BencodeValue::ByteString(bytes)
            }
            b'l' => {
                stack.push(DecodeFrame::list(position));
                position += 1;
                continue;
            }
            b'd' => {
                stack.push(DecodeFrame::dictionary(position));
                position += 1;
                continue;
            }
            b'e' => {
                let frame = stack.pop().ok_or(DecodeError::UnbalancedContainer { position })?;
                let value = frame.close(position)?;
                position += 1;
                value
            }
            byte => return Err(DecodeError::InvalidTypeTag { position, byte }),
        };

        match stack.last_mut() {
            Some(frame) => frame.push(value, start)?,
            None => {
                if position < data.len() {
                    return Err(DecodeError::TrailingData { position });
                }
                return Ok(value);
            }
        }
    }
}

/// Scans `[-]digits<terminator>` starting at `start`. Returns the literal
/// (sign included) and the offset just past the terminator, or `None` when the
/// digit run is empty, has a leading zero, is `-0`, or is not followed by the
/// terminator.
fn scan_decimal(data: &[u8], start: usize, terminator: u8, signed: bool) -> Option<(&[u8], usize)>
{
    let mut cursor = start;
    if signed && data.get(cursor) == Some(&b'-') {
        cursor += 1;
    }
    let digits_start = cursor;
    while data.get(cursor).is_some_and(u8::is_ascii_digit) {
        cursor += 1;
    }

    let digits = &data[digits_start..cursor];
    if digits.is_empty() || data.get(cursor) != Some(&terminator) {
        return None;
    }
    if digits[0] == b'0' && (digits.len() > 1 || digits_start > start) {
        return None;
    }
    Some((&data[start..cursor], cursor + 1))
}

fn decode_integer(data: &[u8], start: usize) -> Result<(BencodeValue, usize), DecodeError>
{
    let (literal, next) = scan_decimal(data, start + 1, b'e', true)
        .ok_or(DecodeError::InvalidInteger { position: start })?;
    let value = BigInt::parse_bytes(literal, 10)
        .ok_or(DecodeError::InvalidInteger { position: start })?;
    Ok((BencodeValue::Integer(value), next))
}

fn decode_byte_string(data: &[u8], start: usize) -> Result<(Vec<u8>, usize), DecodeError>
{
    let truncated = DecodeError::TruncatedString { position: start };
    let (literal, body_start) = scan_decimal(data, start, b':', false).ok_or(truncated)?;
    let length = std::str::from_utf8(literal).ok()
        .and_then(|digits| digits.parse::<usize>().ok())
        .ok_or(truncated)?;
    let body_end = body_start.checked_add(length).ok_or(truncated)?;
    if body_end > data.len() {
        return Err(truncated);
    }
    Ok((data[body_start..body_end].to_vec(), body_end))
}
