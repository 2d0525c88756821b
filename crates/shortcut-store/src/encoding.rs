use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Indentation used by every JSON document the service writes.
const INDENT: &[u8] = b"    ";

/// Serializes `value` as pretty-printed JSON indented with four spaces.
pub fn to_pretty_vec<T>(value: &T) -> serde_json::Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(buf)
}
