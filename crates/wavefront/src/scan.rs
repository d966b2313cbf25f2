//! Tolerant numeric readers shared by the OBJ and MTL parsers.
//!
//! A token that is missing or does not parse as a whole becomes `0.0`
//! and the line keeps going. That keeps a single stray character from
//! discarding an otherwise fine file.

/// Read one float from an optional token, degrading to `0.0`.
pub(crate) fn float_or_zero(token: Option<&str>) -> f32 {
    match token.map(str::parse::<f32>) {
        Some(Ok(value)) => value,
        Some(Err(_)) => {
            log::debug!("Unreadable number {:?}, using 0", token.unwrap_or_default());
            0.0
        }
        None => 0.0,
    }
}

/// Read up to three floats from a token stream.
pub(crate) fn float3<'a, I>(parts: &mut I) -> [f32; 3]
where
    I: Iterator<Item = &'a str>,
{
    [
        float_or_zero(parts.next()),
        float_or_zero(parts.next()),
        float_or_zero(parts.next()),
    ]
}

/// Read up to two floats from a token stream.
pub(crate) fn float2<'a, I>(parts: &mut I) -> [f32; 2]
where
    I: Iterator<Item = &'a str>,
{
    [float_or_zero(parts.next()), float_or_zero(parts.next())]
}
