use crate::expr_tokenizer::{ExprToken, ExprTokenizer};

#[test]
fn basic_ops() {
    let mut lx = ExprTokenizer::new("3+4*2/(1-5)".chars());
    let expect = [
        ExprToken::Number(3.0),
        ExprToken::Operator('+'),
        ExprToken::Number(4.0),
        ExprToken::Operator('*'),
        ExprToken::Number(2.0),
        ExprToken::Operator('/'),
        ExprToken::LParen,
        ExprToken::Number(1.0),
        ExprToken::Operator('-'),
        ExprToken::Number(5.0),
        ExprToken::RParen,
    ];
    for exp_token in expect.iter() {
        let token = lx.next().unwrap();
        assert_eq!(*exp_token, token);
    }
    assert_eq!(lx.next(), None);
}

#[test]
fn functions_and_variables() {
    let mut lx = ExprTokenizer::new("x * y + pow(x  2) - sin(alpha)".chars());
    let expect = [
        ExprToken::Identifier(format!("x")),
        ExprToken::Operator('*'),
        ExprToken::Identifier(format!("y")),
        ExprToken::Operator('+'),
        ExprToken::Identifier(format!("pow")),
        ExprToken::LParen,
        ExprToken::Identifier(format!("x")),
        ExprToken::Number(2.0),
        ExprToken::RParen,
        ExprToken::Operator('-'),
        ExprToken::Identifier(format!("sin")),
        ExprToken::LParen,
        ExprToken::Identifier(format!("alpha")),
        ExprToken::RParen,
    ];
    for exp_token in expect.iter() {
        let token = lx.next().unwrap();
        assert_eq!(*exp_token, token);
    }
    assert_eq!(lx.next(), None);
}

#[test]
fn commas_split_arguments() {
    let tokens: Vec<ExprToken> = ExprTokenizer::new("pow(2,-3.25)".chars()).collect();
    assert_eq!(
        tokens,
        vec![
            ExprToken::Identifier(format!("pow")),
            ExprToken::LParen,
            ExprToken::Number(2.0),
            ExprToken::Comma,
            ExprToken::Operator('-'),
            ExprToken::Number(3.25),
            ExprToken::RParen,
        ]
    );
}

#[test]
fn unknown_lexemes() {
    let tokens: Vec<ExprToken> = ExprTokenizer::new("2x + 1.2.3 + x1 + 4. % 2".chars()).collect();
    assert_eq!(
        tokens,
        vec![
            ExprToken::Unknown(format!("2x")),
            ExprToken::Operator('+'),
            ExprToken::Unknown(format!("1.2.3")),
            ExprToken::Operator('+'),
            ExprToken::Unknown(format!("x1")),
            ExprToken::Operator('+'),
            ExprToken::Unknown(format!("4.")),
            ExprToken::Unknown(format!("%")),
            ExprToken::Number(2.0),
        ]
    );
}

#[test]
fn one_token_lookahead() {
    let mut lx = ExprTokenizer::scanner("- 7".chars());
    assert_eq!(lx.next(), Some(ExprToken::Operator('-')));
    assert_eq!(lx.peek(), Some(ExprToken::Number(7.0)));
    assert_eq!(lx.next(), Some(ExprToken::Number(7.0)));
    assert_eq!(lx.next(), None);
}

#[test]
fn display_round_trips_lexemes() {
    let rendered: Vec<String> = ExprTokenizer::new("abs(-5.5) / 2,q?".chars())
        .map(|t| t.to_string())
        .collect();
    assert_eq!(rendered, vec!["abs", "(", "-", "5.5", ")", "/", "2", ",", "q?"]);
}
