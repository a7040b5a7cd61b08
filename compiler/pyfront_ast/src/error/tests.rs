use pretty_assertions::assert_eq;

use super::*;

#[test]
fn structural_messages_are_fixed() {
    let cases = [
        (
            StructuralError::AmbiguousGeneratorArgument,
            "Generator expression must be parenthesized if not sole argument",
        ),
        (StructuralError::TooManyArguments { count: 300 }, "more than 255 arguments"),
        (StructuralError::PositionalAfterKeyword, "non-keyword arg after keyword arg"),
        (
            StructuralError::PositionalAfterSplat,
            "only named arguments may follow *expression",
        ),
        (StructuralError::KeywordIsComplexExpression, "keyword can't be an expression"),
        (StructuralError::KeywordIsLambda, "lambda cannot contain assignment"),
        (
            StructuralError::ForbiddenKeywordName { name: "None" },
            "cannot assign to None",
        ),
        (
            StructuralError::DuplicateKeywordName { name: "a" },
            "keyword argument repeated",
        ),
    ];
    for (reason, message) in cases {
        assert_eq!(BuildError::new(reason, Span::DUMMY).to_string(), message);
    }
}

#[test]
fn every_structural_reason_has_its_own_code() {
    let codes: Vec<ErrorCode> = [
        StructuralError::AmbiguousGeneratorArgument,
        StructuralError::TooManyArguments { count: 256 },
        StructuralError::PositionalAfterKeyword,
        StructuralError::PositionalAfterSplat,
        StructuralError::KeywordIsComplexExpression,
        StructuralError::KeywordIsLambda,
        StructuralError::ForbiddenKeywordName { name: "None" },
        StructuralError::DuplicateKeywordName { name: "a" },
    ]
    .into_iter()
    .map(|reason| BuildError::new(reason, Span::DUMMY).code())
    .collect();
    assert_eq!(
        codes,
        vec![
            ErrorCode::E2001,
            ErrorCode::E2002,
            ErrorCode::E2003,
            ErrorCode::E2004,
            ErrorCode::E2005,
            ErrorCode::E2006,
            ErrorCode::E2007,
            ErrorCode::E2008,
        ]
    );
}

#[test]
fn builder_level_codes() {
    let forbidden = BuildError::new(
        BuildErrorKind::ForbiddenName { name: "__debug__" },
        Span::DUMMY,
    );
    assert_eq!(forbidden.code(), ErrorCode::E2007);
    assert_eq!(forbidden.structural(), None);

    let target = BuildError::new(BuildErrorKind::InvalidTarget { what: "literal" }, Span::DUMMY);
    assert_eq!(target.code(), ErrorCode::E2010);
    assert_eq!(target.to_string(), "cannot assign to literal");

    let unsupported = BuildError::new(
        BuildErrorKind::Unsupported { what: "argument" },
        Span::DUMMY,
    );
    assert_eq!(unsupported.code(), ErrorCode::E2009);
}

#[test]
fn diagnostic_is_located_at_the_error_span() {
    let err = BuildError::new(StructuralError::DuplicateKeywordName { name: "a" }, Span::new(7, 8));
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E2008);
    assert_eq!(diag.message, "keyword argument repeated");
    assert_eq!(diag.primary_span(), Some(Span::new(7, 8)));
    assert_eq!(diag.labels[0].message, "`a` given again here");
}
