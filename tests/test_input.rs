use rat_currency::delegate::{CurrencyDelegate, NoDelegate, TextFieldDelegate};
use rat_currency::text_host::{TextBuffer, TextHost};
use rat_currency::{CurrencyEngine, CurrencyError, CurrencyInput, FormatConfig, upos_type};
use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

fn dollar() -> CurrencyInput {
    CurrencyInput::new().with_config(FormatConfig::new().with_currency_symbol("$"))
}

#[test]
fn test_typing() {
    let mut c = dollar();
    assert!(c.begin_editing());
    assert!(c.is_editing());

    assert!(c.insert_char('1'));
    assert_eq!(c.text(), "$1.00");
    assert_eq!(c.cursor(), 2);
    c.insert_char('2');
    c.insert_char('3');
    c.insert_char('4');
    assert_eq!(c.text(), "$1,234.00");
    assert_eq!(c.cursor(), 6);

    assert!(c.delete_prev_char());
    assert_eq!(c.text(), "$123.00");
    assert_eq!(c.cursor(), 4);

    c.set_cursor(1).unwrap();
    assert!(c.delete_next_char());
    assert_eq!(c.text(), "$23.00");
    assert_eq!(c.cursor(), 1);

    assert!(c.end_editing());
    assert!(!c.is_editing());
    assert_eq!(c.text(), "$23.00");
}

#[test]
fn test_cash_register() {
    let mut c = dollar();
    c.host_mut().set_text("$0.");
    c.set_cursor(3).unwrap();
    for d in ['1', '2', '3', '4', '5'] {
        c.insert_char(d);
    }
    assert_eq!(c.text(), "$123.45");
    assert_eq!(c.cursor(), 7);
}

#[test]
fn test_delete_edge() {
    let mut c = dollar();
    c.insert_str("5");
    c.set_cursor(0).unwrap();
    assert!(!c.delete_prev_char());
    c.set_cursor(c.len()).unwrap();
    assert!(!c.delete_next_char());
}

#[test]
fn test_delete_selection() -> Result<(), CurrencyError> {
    let mut c = dollar();
    c.insert_str("1234.5");
    assert_eq!(c.text(), "$1,234.5");

    c.set_selection(0, c.len())?;
    assert!(c.delete_prev_char());
    assert_eq!(c.text(), "");
    assert_eq!(c.cursor(), 0);

    c.insert_str("77");
    c.set_selection(1, 3)?;
    c.insert_char('8');
    assert_eq!(c.text(), "$8.00");
    assert_eq!(c.cursor(), 2);
    Ok(())
}

#[test]
fn test_replace_range() {
    let mut c = dollar();
    c.insert_str("5");
    assert_eq!(
        c.replace(2..9, "1"),
        Err(CurrencyError::RangeOutOfBounds(2..9, 5))
    );
    #[allow(clippy::reversed_empty_ranges)]
    let r = c.replace(3..2, "1");
    assert_eq!(r, Err(CurrencyError::InvalidRange(3, 2)));
    assert_eq!(c.replace(2..2, "."), Ok(false));
    assert_eq!(c.text(), "$5.00");
}

#[test]
fn test_value() -> Result<(), CurrencyError> {
    let mut c = dollar();
    assert_eq!(c.value::<f64>(), Err(CurrencyError::NoText));
    assert_eq!(c.value_opt::<f64>(), Ok(None));

    c.set_value(1234.5)?;
    assert_eq!(c.text(), "$1,234.50");
    assert_eq!(c.cursor(), 9);
    assert_eq!(c.value::<f64>()?, 1234.5);
    assert_eq!(c.value_opt::<f64>()?, Some(1234.5));
    assert_eq!(c.raw_value()?.to_literal(), "1234.50");

    c.set_value(7)?;
    assert_eq!(c.text(), "$7.00");

    assert_eq!(
        c.set_value(-1),
        Err(CurrencyError::InvalidNumber("-1".into()))
    );
    assert_eq!(
        c.set_value(f64::NAN),
        Err(CurrencyError::InvalidNumber("NaN".into()))
    );
    assert_eq!(c.text(), "$7.00");

    let c = dollar().with_value(0.5)?;
    assert_eq!(c.text(), "$0.50");
    Ok(())
}

#[test]
fn test_config_no_reformat() -> Result<(), CurrencyError> {
    let mut c = dollar().with_value(5)?;
    c.set_currency_symbol(Some("€".into()));
    c.set_decimal_places(3);
    assert_eq!(c.text(), "$5.00");
    assert_eq!(c.config().decimal_places, 3);

    c.end_editing();
    assert_eq!(c.text(), "€5.000");

    c.set_currency_symbol(None);
    c.set_currency_code(Some("EUR".into()));
    c.end_editing();
    assert_eq!(c.text(), "EUR 5.000");
    Ok(())
}

#[test]
fn test_with_host() {
    let mut c = CurrencyInput::with_host(TextBuffer::new_text("$5"))
        .with_config(FormatConfig::new().with_currency_symbol("$"))
        .with_decimal_places(1);
    c.end_editing();
    assert_eq!(c.text(), "$5.0");
}

#[test]
fn test_clear_submit() {
    let mut c = dollar();
    c.insert_str("12");
    assert!(c.submit());
    assert!(c.clear());
    assert!(c.is_empty());
    assert_eq!(c.cursor(), 0);
}

#[derive(Debug, Default, Clone)]
struct Recorder {
    log: Rc<RefCell<Vec<String>>>,
    veto_change: bool,
    refuse_begin: bool,
    refuse_clear: bool,
}

impl Recorder {
    fn push(&self, s: String) {
        self.log.borrow_mut().push(s);
    }
}

impl TextFieldDelegate for Recorder {
    fn should_begin_editing(&mut self, _host: &dyn TextHost) -> bool {
        self.push("should_begin".into());
        !self.refuse_begin
    }

    fn did_begin_editing(&mut self, _host: &mut dyn TextHost) {
        self.push("did_begin".into());
    }

    fn should_end_editing(&mut self, _host: &dyn TextHost) -> bool {
        self.push("should_end".into());
        true
    }

    fn did_end_editing(&mut self, host: &mut dyn TextHost) {
        self.push(format!("did_end {}", host.text()));
    }

    fn should_clear(&mut self, _host: &dyn TextHost) -> bool {
        self.push("should_clear".into());
        !self.refuse_clear
    }

    fn should_return(&mut self, _host: &dyn TextHost) -> bool {
        self.push("should_return".into());
        false
    }

    fn should_change_text(
        &mut self,
        _host: &mut dyn TextHost,
        range: Range<upos_type>,
        replacement: &str,
    ) -> bool {
        self.push(format!("change {:?} {}", range, replacement));
        !self.veto_change
    }
}

#[test]
fn test_forwarding() {
    let rec = Recorder::default();
    let log = rec.log.clone();

    let mut c = dollar().with_delegate(rec);
    assert!(c.delegate().is_some());

    assert!(c.begin_editing());
    c.insert_char('5');
    assert!(c.end_editing());
    assert!(!c.submit());
    assert!(c.clear());

    assert_eq!(
        *log.borrow(),
        vec![
            "should_begin".to_string(),
            "did_begin".to_string(),
            "change 0..0 5".to_string(),
            "should_end".to_string(),
            "did_end $5.00".to_string(),
            "should_return".to_string(),
            "should_clear".to_string(),
        ]
    );
}

#[test]
fn test_forward_before_reformat() {
    let rec = Recorder::default();
    let log = rec.log.clone();

    let mut c = CurrencyInput::with_host(TextBuffer::new_text("$5"))
        .with_config(FormatConfig::new().with_currency_symbol("$"))
        .with_delegate(rec);
    c.end_editing();

    assert_eq!(log.borrow().last().map(|v| v.as_str()), Some("did_end $5"));
    assert_eq!(c.text(), "$5.00");
}

#[test]
fn test_veto() {
    let rec = Recorder {
        veto_change: true,
        refuse_begin: true,
        refuse_clear: true,
        ..Default::default()
    };

    let mut c = dollar().with_delegate(rec);
    assert!(!c.begin_editing());
    assert!(!c.is_editing());

    assert!(!c.insert_char('5'));
    assert_eq!(c.text(), "");

    c.host_mut().set_text("$5");
    assert!(!c.clear());
    assert_eq!(c.text(), "$5");
}

#[test]
fn test_delegate_alone() {
    let mut d = CurrencyDelegate::new(CurrencyEngine::with_config(
        FormatConfig::new().with_currency_symbol("$"),
    ))
    .with_passthrough(NoDelegate);
    let mut host = TextBuffer::new_text("$1,234");

    host.set_cursor(2).unwrap();
    assert!(!d.should_change_text(&mut host, 2..2, "9"));
    assert_eq!(host.text(), "$19,234");
    assert_eq!(host.cursor(), 3);

    // nothing left to format, the raw edit is applied by the host.
    assert!(d.should_change_text(&mut host, 0..7, ""));

    assert!(d.take_passthrough().is_some());
    assert!(d.passthrough().is_none());
}
