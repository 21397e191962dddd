use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

mod repl {
    use arith_shunting::{extract_variables, is_function, is_valid_expression, MathContext};
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;

    pub fn evalexpr(input: &str) {
        match MathContext::new().eval(input) {
            Err(e) => println!("Eval error: {}", e),
            Ok(result) => println!("{} = {}", input.trim(), result),
        }
    }

    // split 'name = expr' lines, the name must be a plain variable
    fn assignment(input: &str) -> Option<(&str, &str)> {
        let (lhs, rhs) = input.split_once('=')?;
        let var = lhs.trim();
        if lexers::is_word(var) && !is_function(var) {
            Some((var, rhs))
        } else {
            None
        }
    }

    // ask for every variable in expr that has no value yet
    fn bind_missing(
        rl: &mut DefaultEditor,
        cx: &mut MathContext,
        expr: &str,
    ) -> Result<(), ReadlineError> {
        let mut missing: Vec<String> = extract_variables(expr)
            .into_iter()
            .filter(|var| !cx.contains(var))
            .collect();
        missing.sort();
        for var in missing {
            loop {
                let line = rl.readline(&format!("{} = ", var))?;
                match line.trim().parse::<f64>() {
                    Ok(value) => {
                        cx.setvar(&var, value);
                        break;
                    }
                    Err(_) => println!("Not a number: {}", line.trim()),
                }
            }
        }
        Ok(())
    }

    pub fn parse_statement(
        rl: &mut DefaultEditor,
        cx: &mut MathContext,
        input: &str,
    ) -> Result<(), ReadlineError> {
        let (target, expr) = match assignment(input) {
            Some((var, expr)) => (Some(var), expr),
            None => (None, input),
        };
        if !is_valid_expression(expr) {
            println!("Invalid expression: {}", expr.trim());
            return Ok(());
        }
        bind_missing(rl, cx, expr)?;
        match cx.eval(expr) {
            Err(e) => println!("Eval error: {}", e),
            Ok(result) => match target {
                Some(var) => {
                    cx.setvar(var, result);
                    println!("{} = {}", var, result);
                }
                None => println!("{}", result),
            },
        }
        Ok(())
    }
}

fn history_path() -> Option<PathBuf> {
    match std::env::var_os("ARITH_HISTORY") {
        Some(path) => Some(PathBuf::from(path)),
        None => home::home_dir().map(|h| h.join(".arith_history")),
    }
}

fn main() -> Result<(), String> {
    pretty_env_logger::init();

    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        repl::evalexpr(&input);
        return Ok(());
    }

    let mut rl = DefaultEditor::new().map_err(|e| e.to_string())?;
    let histpath = history_path();
    if let Some(ref path) = histpath {
        if rl.load_history(path).is_err() {
            println!("No history yet");
        }
    }
    let mut cx = arith_shunting::MathContext::new();
    loop {
        let outcome = match rl.readline(">> ") {
            Ok(line) if line.trim().is_empty() => Ok(()),
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                repl::parse_statement(&mut rl, &mut cx, &line)
            }
            Err(e) => Err(e),
        };
        match outcome {
            Ok(()) => (),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
        }
    }
    if let Some(path) = histpath {
        rl.save_history(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}
