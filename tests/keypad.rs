use zcalc::calculator::{BinaryOperation, CalcError, CalculatorEngine, Outcome, UnaryFunction};
use zcalc::session::{Mode, Session};
use zcalc::terminal::Terminal;
use zcalc::ui::Presenter;

fn scientific_terminal() -> Terminal {
    Terminal::new(Session::new(Mode::Scientific, Presenter::default()), false)
}

fn press(terminal: &mut Terminal, line: &str) -> String {
    let mut notices = Vec::new();
    terminal.feed_line(line, &mut notices).unwrap();
    String::from_utf8(notices).unwrap()
}

#[test]
fn test_chained_operations_evaluate_left_to_right() {
    let mut terminal = scientific_terminal();
    press(&mut terminal, "2 + 3 * 4 =");
    assert_eq!(terminal.session().state().current_operand(), "20");
}

#[test]
fn test_division_by_zero_shows_error() {
    let mut terminal = scientific_terminal();
    let notices = press(&mut terminal, "5 / 0 Enter");
    assert_eq!(terminal.session().state().current_operand(), "Error");
    assert!(terminal.session().display().error);
    assert_eq!(notices, "! division by zero\n");

    press(&mut terminal, "4");
    assert_eq!(terminal.session().display().current, "4");
}

#[test]
fn test_square_root_and_domain_error() {
    let mut terminal = scientific_terminal();
    press(&mut terminal, "9 sqrt");
    assert_eq!(terminal.session().state().current_operand(), "3");

    press(&mut terminal, "Escape 0 - 1 = sqrt");
    assert_eq!(terminal.session().state().current_operand(), "Error");
}

#[test]
fn test_sine_takes_degrees() {
    let mut terminal = scientific_terminal();
    press(&mut terminal, "90 sin");
    assert_eq!(terminal.session().state().current_operand(), "1");
}

#[test]
fn test_float_artifacts_are_rounded() {
    let mut terminal = scientific_terminal();
    press(&mut terminal, ".1+.2=");
    assert_eq!(terminal.session().state().current_operand(), "0.3");
}

#[test]
fn test_backspace_after_result_clears_everything() {
    let mut terminal = scientific_terminal();
    press(&mut terminal, "7*6= Backspace");
    let state = terminal.session().state();
    assert_eq!(state.current_operand(), "");
    assert_eq!(state.previous_operand(), "");
    assert_eq!(state.pending_operation(), None);
    assert!(!state.should_reset_on_next_input());
}

#[test]
fn test_second_decimal_point_is_ignored() {
    let mut terminal = scientific_terminal();
    press(&mut terminal, "1..2");
    assert_eq!(terminal.session().state().current_operand(), "1.2");
}

#[test]
fn test_operator_before_digits_is_ignored() {
    let mut terminal = scientific_terminal();
    press(&mut terminal, "+");
    let display = terminal.session().display();
    assert_eq!(display.previous, "");
    assert_eq!(display.current, "0");
}

#[test]
fn test_power_and_square() {
    let mut terminal = scientific_terminal();
    press(&mut terminal, "2 xʸ 10 =");
    assert_eq!(terminal.session().display().current, "1,024");

    press(&mut terminal, "12 x²");
    assert_eq!(terminal.session().state().current_operand(), "144");
}

#[test]
fn test_engine_reports_domain_error_signal() {
    let mut engine = CalculatorEngine::new();
    engine.append_digit('0');
    let outcome = engine.apply_unary_function(UnaryFunction::Ln);
    assert_eq!(
        outcome,
        Outcome::Failed(CalcError::Domain {
            function: UnaryFunction::Ln,
            operand: 0.0,
        })
    );

    engine.append_digit('3');
    engine.choose_operation(BinaryOperation::Subtract);
    engine.append_digit('5');
    assert_eq!(engine.compute(), Outcome::Applied);
    assert_eq!(engine.state().current_operand(), "-2");
}

#[test]
fn test_full_precision_results_are_not_nudged() {
    let mut terminal = scientific_terminal();
    press(&mut terminal, "600000.0000000001 + 0 =");
    assert_eq!(terminal.session().state().current_operand(), "600000.0000000001");

    press(&mut terminal, "500000.1234567891 + 0 =");
    assert_eq!(terminal.session().state().current_operand(), "500000.1234567891");
}

#[test]
fn test_function_keys_attached_to_digits() {
    let mut terminal = scientific_terminal();
    press(&mut terminal, "16sqrt");
    assert_eq!(terminal.session().state().current_operand(), "4");
}
