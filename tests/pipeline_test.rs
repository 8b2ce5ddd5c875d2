// Integration tests for the lexer, parser, translators and compile driver

use ensina::config::{LexerOptions, Options};
use ensina::parser::lexer::{analyze_with, TokenKind};
use ensina::pipeline::{compile, Stage};

#[test]
fn test_tokens_of_simple_assignment() {
    let (tokens, errors) = ensina::analyze("x = 10 ;");
    assert!(errors.is_empty());
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::End
        ]
    );
}

#[test]
fn test_keywords_match_whole_words_only() {
    let (tokens, errors) = ensina::analyze("seguro = 1; se seguro > 0 entao { y = 1; }");
    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].text, "seguro");
    assert_eq!(tokens[4].kind, TokenKind::If);
}

#[test]
fn test_lexical_errors_coalesced_per_line() {
    let (_, errors) = ensina::analyze("x = 1 @ 2 $;\ny = 3;");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("line 1"), "{}", errors[0]);
    assert!(errors[0].contains("columns: 7, 11"), "{}", errors[0]);
    assert_eq!(errors[0].matches('^').count(), 2);
}

#[test]
fn test_lexical_errors_on_two_lines() {
    let (_, errors) = ensina::analyze("x = @;\ny = $;");
    assert_eq!(errors.len(), 2);
    assert!(errors[0].contains("line 1"));
    assert!(errors[1].contains("line 2"));
}

#[test]
fn test_comments_dropped_by_default_and_kept_on_request() {
    let source = "# inicio\nx = 1;";
    let (plain, _) = ensina::analyze(source);
    assert!(plain.iter().all(|t| t.kind != TokenKind::Comment));

    let (kept, _) = analyze_with(source, LexerOptions { keep_comments: true });
    assert_eq!(kept[0].kind, TokenKind::Comment);

    let options = Options {
        lexer: LexerOptions { keep_comments: true },
        ..Options::default()
    };
    let report = compile(source, &options);
    assert!(report.succeeded());
    assert_eq!(report.python, "# inicio\nx = 1\n");
    assert_eq!(report.postfix, "# inicio\nx 1 =\n");
}

#[test]
fn test_parser_terminates_on_garbage() {
    let (tokens, _) = ensina::analyze(") ) ] } = = ; ; entao senao [ ( ((");
    let (ast, errors) = ensina::parse(tokens);
    assert!(!errors.is_empty());
    assert!(ast.statements.is_empty());
}

#[test]
fn test_translators_do_not_mutate_ast() {
    let (tokens, _) = ensina::analyze("a = [2]; para (i = 0; i < 2; i = i + 1) { a[i] = i * 2; }");
    let (ast, errors) = ensina::parse(tokens);
    assert!(errors.is_empty());
    let before = ast.clone();

    let postfix = ensina::to_postfix_trace(&ast);
    let python = ensina::to_generated_source(&ast);
    assert_eq!(ast, before);
    assert_eq!(postfix, ensina::to_postfix_trace(&ast));
    assert_eq!(python, ensina::to_generated_source(&ast));

    let (run_errors, _) = ensina::run(&ast);
    assert!(run_errors.is_empty());
    assert_eq!(ast, before);
}

#[test]
fn test_compile_stops_at_first_failing_stage() {
    let lexical = compile("x = 1 @;", &Options::default());
    assert_eq!(lexical.failed_stage, Some(Stage::Lexical));
    assert!(lexical.ast.is_none());

    let syntax = compile("x = ;", &Options::default());
    assert_eq!(syntax.failed_stage, Some(Stage::Syntax));
    assert!(syntax.ast.is_some());
    assert!(syntax.symbols.is_none());

    let semantic = compile("x = y;", &Options::default());
    assert_eq!(semantic.failed_stage, Some(Stage::Semantic));
    assert!(semantic.symbols.is_some());
    assert!(semantic.diagnostics()[0].starts_with("Undefined variable at line 1, column 5"));
}

#[test]
fn test_loop_ceiling_is_configurable() {
    let mut options = Options::default();
    options.eval.max_loop_iterations = 5;
    let report = compile("n = 0; enquanto n >= 0 { n = n + 1; }", &options);
    assert_eq!(report.failed_stage, Some(Stage::Semantic));
    assert_eq!(
        report.symbols.as_ref().and_then(|s| s.value("n")),
        Some(&ensina::memory::value::Value::Int(5))
    );
}

#[test]
fn test_very_long_sum_is_cut_off_and_translates() {
    let source = format!("x = {}1;", "1 + ".repeat(20_000));
    let (tokens, _) = ensina::analyze(&source);
    let (ast, errors) = ensina::parse(tokens);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].expected, "shallower nesting");

    assert!(ensina::to_postfix_trace(&ast).starts_with("x 1 1 +"));
    assert!(ensina::to_generated_source(&ast).starts_with("x = "));

    let report = compile(&source, &Options::default());
    assert_eq!(report.failed_stage, Some(Stage::Syntax));
    assert!(!report.tree.is_empty());
}

#[test]
fn test_long_sum_below_cutoff_compiles() {
    let source = format!("x = {}1;", "1 + ".repeat(1500));
    let report = compile(&source, &Options::default());
    assert!(report.succeeded(), "{:?}", report.diagnostics());
    assert_eq!(
        report.symbols.as_ref().and_then(|s| s.value("x")),
        Some(&ensina::memory::value::Value::Int(1501))
    );
}
