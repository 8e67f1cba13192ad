use recordkit::prelude::*;

#[derive(Debug, PartialEq, Record)]
struct Settings {
    #[record(default = 30)]
    pub timeout: i64,

    #[record(nullable)]
    pub proxy: Option<String>,

    #[record(nullable)]
    extra: Value,
}

fn main() {
    let settings = Settings::create(&Map::new()).unwrap();
    assert_eq!(settings.timeout, 30);
    assert_eq!(settings.proxy, None);
    assert_eq!(settings.extra, Value::Null);

    let again = Settings::create(&settings.to_map()).unwrap();
    assert_eq!(again, settings);
}
