//! Statement-level error recovery.

use pyfront_ir::TokenKind;
use tracing::trace;

use crate::cursor::Cursor;

/// Skip the rest of a broken statement: advance past the next `Newline`, or
/// stop at `Eof`.
///
/// Returns the number of skipped tokens.
pub fn synchronize(cursor: &mut Cursor<'_>) -> usize {
    let start = cursor.position();
    while !cursor.is_at_end() {
        if cursor.check(&TokenKind::Newline) {
            cursor.advance();
            break;
        }
        cursor.advance();
    }
    let skipped = cursor.position() - start;
    trace!(skipped, "recovered to statement boundary");
    skipped
}
