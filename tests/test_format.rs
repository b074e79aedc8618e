use rat_currency::currency_format::{CurrencyFormat, PatternCurrencyFormat};
use rat_currency::{CurrencyError, FormatConfig, Locale, RawValue};

fn dollar() -> FormatConfig {
    FormatConfig::new().with_currency_symbol("$")
}

#[test]
fn test_pattern() -> Result<(), CurrencyError> {
    assert_eq!(
        PatternCurrencyFormat::pattern(&RawValue::parse("12123.3")?, "$"),
        "\\$00,000.0"
    );
    assert_eq!(
        PatternCurrencyFormat::pattern(&RawValue::parse("123")?, "EUR "),
        "\\E\\U\\R\\ 000"
    );
    assert_eq!(
        PatternCurrencyFormat::pattern(&RawValue::parse("1234567")?, ""),
        "0,000,000"
    );
    assert_eq!(PatternCurrencyFormat::pattern(&RawValue::new(), ""), "0");
    Ok(())
}

#[test]
fn test_format() -> Result<(), CurrencyError> {
    let f = PatternCurrencyFormat::new();
    let cfg = dollar();

    assert_eq!(
        f.format(&RawValue::parse("1234567.891")?, 2, &cfg),
        Some("$1,234,567.89".into())
    );
    assert_eq!(
        f.format(&RawValue::parse("5")?, 2, &cfg),
        Some("$5.00".into())
    );
    assert_eq!(
        f.format(&RawValue::parse("5.5")?, 0, &cfg),
        Some("$5.5".into())
    );
    assert_eq!(
        f.format(&RawValue::parse("5.50")?, 0, &cfg),
        Some("$5.5".into())
    );
    assert_eq!(
        f.format(&RawValue::parse("5.50")?, 1, &cfg),
        Some("$5.5".into())
    );
    assert_eq!(f.format(&RawValue::parse("0")?, 0, &cfg), Some("$0".into()));
    assert_eq!(
        f.format(&RawValue::parse("999")?, 0, &cfg.clone().with_decimal_places(0)),
        Some("$999".into())
    );
    assert_eq!(
        f.format(&RawValue::parse("0.995")?, 2, &cfg),
        Some("$1.00".into())
    );
    Ok(())
}

#[test]
fn test_min_above_max() -> Result<(), CurrencyError> {
    let f = PatternCurrencyFormat::new();
    let cfg = dollar().with_decimal_places(1);
    assert_eq!(
        f.format(&RawValue::parse("5")?, 2, &cfg),
        Some("$5.0".into())
    );
    Ok(())
}

#[test]
fn test_parse() -> Result<(), CurrencyError> {
    let f = PatternCurrencyFormat::new();
    assert_eq!(f.parse("$1,234.50"), Some(RawValue::parse("1234.50")?));
    assert_eq!(f.parse("EUR 12"), Some(RawValue::parse("12")?));
    assert_eq!(f.parse("$"), None);
    assert_eq!(f.parse("$1.2.3"), None);
    Ok(())
}

#[test]
fn test_display_symbol() {
    assert_eq!(dollar().display_symbol(), "$");
    assert_eq!(
        FormatConfig::new().with_currency_code("USD").display_symbol(),
        "USD "
    );
    assert_eq!(
        FormatConfig::new()
            .with_currency_code("USD")
            .with_currency_symbol("US$")
            .display_symbol(),
        "US$"
    );
    assert_eq!(
        FormatConfig::new().with_currency_symbol("A1.$").display_symbol(),
        "A$"
    );
    assert_eq!(FormatConfig::new().display_symbol(), "");
}

#[test]
fn test_locale() {
    let cfg = FormatConfig::from_locale(Locale::en_US);
    assert_eq!(cfg.currency_code.as_deref(), Some("USD"));
    assert_eq!(cfg.currency_symbol.as_deref(), Some("$"));
    assert_eq!(cfg.decimal_places, 2);

    let cfg = FormatConfig::new()
        .with_decimal_places(3)
        .with_locale(Locale::de_DE);
    assert_eq!(cfg.currency_code.as_deref(), Some("EUR"));
    assert_eq!(cfg.currency_symbol.as_deref(), Some("€"));
    assert_eq!(cfg.decimal_places, 3);
}

#[test]
fn test_to_number() -> Result<(), CurrencyError> {
    let v = RawValue::parse("1234.50")?;
    assert_eq!(v.to_number::<f64>()?, 1234.5);
    assert_eq!(
        v.to_number::<u32>(),
        Err(CurrencyError::InvalidNumber("1234.50".into()))
    );
    assert_eq!(RawValue::parse("12")?.to_number::<u32>()?, 12);
    Ok(())
}
