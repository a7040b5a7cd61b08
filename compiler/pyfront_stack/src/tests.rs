use super::*;

/// Mimics a nested-call walk: each level owns a little local state.
fn nesting_depth(levels: usize) -> usize {
    ensure_sufficient_stack(|| {
        let frame = [0u8; 64];
        if levels == 0 {
            frame.len() - 64
        } else {
            nesting_depth(levels - 1) + 1
        }
    })
}

#[test]
fn shallow_nesting() {
    assert_eq!(nesting_depth(3), 3);
}

#[test]
fn deep_nesting_grows_the_stack() {
    assert_eq!(nesting_depth(200_000), 200_000);
}

#[test]
fn propagates_results() {
    let ok: Result<u32, String> = ensure_sufficient_stack(|| Ok(7));
    assert_eq!(ok, Ok(7));
    let err: Result<u32, String> = ensure_sufficient_stack(|| Err("boom".to_string()));
    assert_eq!(err, Err("boom".to_string()));
}
