use recordkit::prelude::*;

// Two derives in one module must not collide.
#[derive(Record)]
struct First {
    #[record(nullable)]
    pub a: Option<i64>,
}

#[derive(Record)]
struct Second {
    #[record(nullable)]
    pub a: Option<i64>,
    pub(crate) b: Option<bool>,
}

fn main() {
    assert_eq!(First::schema().name(), "First");
    assert_eq!(Second::fields().protected, ["b"]);
    assert!(First::create(&Map::new()).unwrap().a.is_none());
    assert!(Second::create(&Map::new()).unwrap().b.is_none());
}
