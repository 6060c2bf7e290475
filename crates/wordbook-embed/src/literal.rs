//! JavaScript array literal rendering.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

/// Name of the constant the injector owns inside the page script.
pub const WORD_SETS_CONST: &str = "DEFAULT_WORD_SETS";

/// Marker comment preceding the owned assignment.
pub const WORD_SETS_COMMENT: &str = "// 기본 단어 데이터 (results 폴더의 JSON 파일들)";

/// Render the word sets as a JavaScript array literal.
///
/// Twelve spaces per nesting level keeps the literal aligned with the
/// surrounding script; non-ASCII text is written as-is rather than escaped.
pub fn render_array_literal(sets: &[Value]) -> String {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"            ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);

    // Writing JSON values into an in-memory buffer cannot fail.
    sets.serialize(&mut ser).expect("serializing word sets");

    String::from_utf8(buf).expect("serializer emits UTF-8")
}
