use super::*;

#[test]
fn test_passes_through_closure_value() {
    assert_eq!(ensure_sufficient_stack(|| "done"), "done");
}

#[test]
fn test_propagates_errors_unchanged() {
    let result: Result<u8, String> = ensure_sufficient_stack(|| Err("boom".to_string()));
    assert_eq!(result, Err("boom".to_string()));
}

#[test]
fn test_survives_recursion_deeper_than_default_stack() {
    // Mirrors an evaluator walking a left-leaning chain of 200k binary nodes.
    fn depth(n: u32) -> u32 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
    }

    assert_eq!(depth(200_000), 200_000);
}
