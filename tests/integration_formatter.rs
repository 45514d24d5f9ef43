//! Integration tests for the money formatter

use theme_money::{Amount, Config, FormatError, MoneyFormatter, ShopSettings};

mod common;

#[test]
fn test_default_template_examples() {
    let formatter = MoneyFormatter::new();

    assert_eq!(formatter.format(0, None).unwrap(), "$0.00");
    assert_eq!(formatter.format(150000, None).unwrap(), "$1,500.00");
    assert_eq!(formatter.format("1.234", None).unwrap(), "$12.34");
    assert_eq!(formatter.format(f64::NAN, None).unwrap(), "$0.00");
    assert_eq!(formatter.format(None::<i64>, None).unwrap(), "$0.00");
}

#[test]
fn test_explicit_templates() {
    let formatter = MoneyFormatter::new();

    assert_eq!(formatter.format(150000, Some("{{amount_no_decimals}}")).unwrap(), "1,500");
    assert_eq!(
        formatter.format(150000, Some("{{amount_with_comma_separator}}")).unwrap(),
        "1.500,00"
    );
    assert_eq!(
        formatter
            .format(123456789, Some("<span class=money>{{ amount_no_decimals_with_comma_separator }} kr</span>"))
            .unwrap(),
        "<span class=money>1.234.568 kr</span>"
    );
}

#[test]
fn test_template_errors() {
    let formatter = MoneyFormatter::new();

    assert_eq!(
        formatter.format(100, Some("Price")),
        Err(FormatError::MalformedTemplate("Price".to_string()))
    );
    assert_eq!(
        formatter.format(100, Some("{{amount_with_space_separator}}")),
        Err(FormatError::UnrecognizedMode("amount_with_space_separator".to_string()))
    );
}

#[test]
fn test_formatters_are_isolated() {
    let euro = MoneyFormatter::with_default_template("{{amount_with_comma_separator}} €").unwrap();
    let plain = MoneyFormatter::new();

    assert_eq!(euro.format(9900, None).unwrap(), "99,00 €");
    assert_eq!(plain.format(9900, None).unwrap(), "$99.00");
}

#[test]
fn test_formatter_from_settings_fixture() {
    let settings = ShopSettings::from_json(common::EURO_SHOP_SETTINGS).unwrap();
    let formatter = MoneyFormatter::from_settings(&settings).unwrap();

    assert_eq!(formatter.format(Amount::from(249999), None).unwrap(), "€2.499,99");
    assert_eq!(formatter.format_with_currency(249999), "€2.499,99 EUR");
}

#[test]
fn test_formatter_from_config_settings_file() {
    let file = common::write_settings(common::EURO_SHOP_SETTINGS);
    let path = file.path().to_string_lossy().to_string();

    let config = Config::from_lookup(|key| match key {
        "SHOP_SETTINGS" => Some(path.clone()),
        _ => None,
    })
    .unwrap();
    let formatter = MoneyFormatter::from_config(&config);

    assert_eq!(formatter.format(100, None).unwrap(), "€1,00");
}

#[test]
fn test_formatter_shared_across_threads() {
    let formatter = std::sync::Arc::new(MoneyFormatter::new());

    let handles: Vec<_> = (0..4i64)
        .map(|i| {
            let formatter = formatter.clone();
            std::thread::spawn(move || formatter.format(i * 100_000, None).unwrap())
        })
        .collect();
    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results, vec!["$0.00", "$1,000.00", "$2,000.00", "$3,000.00"]);
}
