use proptest::prelude::*;
use recordkit::{prelude::*, serialize::from_document};
use std::sync::Arc;

// ---- strategies --------------------------------------------------------

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e9..1.0e9f64).prop_map(Value::Float),
        "[a-z]{0,8}".prop_map(Value::Text),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(2, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            prop::collection::vec(("[a-z]{1,4}", inner), 0..4)
                .prop_map(|entries| Value::Map(entries.into_iter().collect())),
        ]
    })
}

fn value_of(ty: ScalarType) -> BoxedStrategy<Value> {
    match ty {
        ScalarType::Array => prop::collection::vec(arb_leaf(), 0..4)
            .prop_map(Value::List)
            .boxed(),
        ScalarType::Bool => any::<bool>().prop_map(Value::Bool).boxed(),
        ScalarType::Float => (-1.0e9..1.0e9f64).prop_map(Value::Float).boxed(),
        ScalarType::Int => any::<i64>().prop_map(Value::Int).boxed(),
        ScalarType::Object => prop::collection::vec(("[a-z]{1,4}", arb_leaf()), 0..4)
            .prop_map(|entries| Value::Map(entries.into_iter().collect()))
            .boxed(),
        ScalarType::String => "[a-z]{0,8}".prop_map(Value::Text).boxed(),
    }
}

fn schema() -> Arc<RecordSchema> {
    let mut builder = RecordSchema::builder("Everything");
    for (index, ty) in ScalarType::ALL.into_iter().enumerate() {
        builder = builder
            .field(FieldDescriptor::public(format!("pub_{ty}")).typed(ty))
            .field(FieldDescriptor::private(format!("opt_{ty}")).optional(ty));
        if index % 2 == 0 {
            builder = builder.field(FieldDescriptor::protected(format!("marked_{ty}")).typed(ty).nullable());
        }
    }

    Arc::new(builder.field(FieldDescriptor::public("free")).build().unwrap())
}

// One sample per category, looked up by type.
#[derive(Clone, Debug)]
struct Samples(Vec<(ScalarType, Value)>);

impl Samples {
    fn get(&self, ty: ScalarType) -> Value {
        self.0
            .iter()
            .find(|(candidate, _)| *candidate == ty)
            .map(|(_, value)| value.clone())
            .unwrap_or_default()
    }
}

fn arb_samples() -> impl Strategy<Value = Samples> {
    (
        value_of(ScalarType::Array),
        value_of(ScalarType::Bool),
        value_of(ScalarType::Float),
        value_of(ScalarType::Int),
        value_of(ScalarType::Object),
        value_of(ScalarType::String),
    )
        .prop_map(|(array, boolean, float, int, object, string)| {
            Samples(vec![
                (ScalarType::Array, array),
                (ScalarType::Bool, boolean),
                (ScalarType::Float, float),
                (ScalarType::Int, int),
                (ScalarType::Object, object),
                (ScalarType::String, string),
            ])
        })
}

prop_compose! {
    fn arb_input()(
        required in arb_samples(),
        optional in arb_samples(),
        present in any::<[bool; 6]>(),
        free in arb_value(),
    ) -> Map {
        let mut input = Map::new();
        for ty in ScalarType::ALL {
            input.insert(format!("pub_{ty}"), required.get(ty));
        }
        for (ty, present) in ScalarType::ALL.into_iter().zip(present) {
            if present {
                input.insert(format!("opt_{ty}"), optional.get(ty));
            }
        }
        input.insert("free", free);

        input
    }
}

proptest! {
    #[test]
    fn valid_input_always_constructs(input in arb_input()) {
        prop_assert!(Record::create(&schema(), &input).is_ok());
    }

    #[test]
    fn document_round_trip_matches_map(input in arb_input()) {
        let record = Record::create(&schema(), &input).unwrap();

        prop_assert_eq!(from_document(record.to_document()).unwrap(), record.to_map());
    }

    #[test]
    fn reconstruction_is_idempotent(input in arb_input()) {
        let schema = schema();
        let record = Record::create(&schema, &input).unwrap();
        let again = Record::create(&schema, &record.to_map()).unwrap();

        prop_assert_eq!(again, record);
    }

    #[test]
    fn wrong_category_is_always_rejected(input in arb_input(), declared in 0..6usize, actual in 0..6usize) {
        prop_assume!(declared != actual);

        let declared = ScalarType::ALL[declared];
        let actual = ScalarType::ALL[actual];
        let wrong = match actual {
            ScalarType::Array => Value::List(Vec::new()),
            ScalarType::Bool => Value::Bool(false),
            ScalarType::Float => Value::Float(1.0),
            ScalarType::Int => Value::Int(1),
            ScalarType::Object => Value::Map(Map::new()),
            ScalarType::String => Value::Text(String::new()),
        };

        let mut input = input;
        input.insert(format!("pub_{declared}"), wrong);
        let err = Record::create(&schema(), &input).unwrap_err();

        prop_assert_eq!(err.field(), format!("pub_{declared}"));
    }
}
