use recordkit::{Record, traits::RecordType, value::Map};

#[derive(Record)]
pub struct Minimal {
    pub id: i64,
}

fn main() {
    let minimal = Minimal::create(&Map::from([("id", 1)])).unwrap();
    assert_eq!(minimal.id, 1);
    assert_eq!(Minimal::fields().all, ["id"]);
}
