use super::*;

#[test]
fn eval_info_uses_string_filename() {
    let info = CompileInfo::eval();
    assert_eq!(info.filename, "<string>");
    assert_eq!(info.mode, Mode::Eval);
}

#[test]
fn default_is_exec() {
    assert_eq!(CompileInfo::default().mode, Mode::Exec);
    assert_eq!(Mode::Eval.to_string(), "eval");
}
