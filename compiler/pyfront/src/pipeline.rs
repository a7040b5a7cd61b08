//! The front end as one call: lex, parse, build the AST.
//!
//! All three phases report into a single `DiagnosticQueue`, so a lex error
//! and the parse error it causes on the same line surface once, and output
//! is sorted by position.

use pyfront_ast::{build_module, AstModule, CompileInfo, Mode};
use pyfront_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue};
use pyfront_ir::StringInterner;
use tracing::debug;

/// Everything the front end produced for one unit.
pub struct Compilation {
    pub interner: StringInterner,
    pub module: AstModule,
    /// Sorted by source position.
    pub diagnostics: Vec<Diagnostic>,
}

impl Compilation {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

#[tracing::instrument(level = "debug", skip_all, fields(file = %info.filename, mode = %info.mode))]
pub fn compile(source: &str, info: &CompileInfo, config: DiagnosticConfig) -> Compilation {
    let interner = StringInterner::new();
    let mut queue = DiagnosticQueue::with_config(source, config);

    let lexed = pyfront_lexer::lex(source, &interner);
    for error in &lexed.errors {
        queue.emit_error(error.to_diagnostic());
    }

    let parsed = match info.mode {
        Mode::Exec => pyfront_parse::parse_file(&lexed.tokens),
        Mode::Eval => pyfront_parse::parse_eval(&lexed.tokens),
    };
    for error in &parsed.errors {
        queue.emit_error(error.to_diagnostic());
    }
    debug!(
        tokens = lexed.tokens.len(),
        nodes = parsed.tree.len(),
        "parsed"
    );

    let module = build_module(&parsed.tree, parsed.root, &interner, info, &mut queue);
    let diagnostics = queue.flush();
    debug!(
        statements = module.body.len(),
        diagnostics = diagnostics.len(),
        "front end finished"
    );
    Compilation {
        interner,
        module,
        diagnostics,
    }
}
