use crate::{schema::field::FieldDescriptor, types::Visibility};
use serde::Serialize;

///
/// FieldKeys
///
/// Field names grouped by visibility. `all` is `public ++ private ++
/// protected`, each group in declaration order; it is the construction order
/// and therefore the order validation errors are reported in.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct FieldKeys {
    pub public: Vec<String>,
    pub private: Vec<String>,
    pub protected: Vec<String>,
    pub all: Vec<String>,
}

impl FieldKeys {
    /// Names of one visibility group.
    #[must_use]
    pub fn group(&self, visibility: Visibility) -> &[String] {
        match visibility {
            Visibility::Public => &self.public,
            Visibility::Private => &self.private,
            Visibility::Protected => &self.protected,
        }
    }
}

/// Group descriptors by visibility and return the keys together with the
/// construction order as indices into `fields`.
pub(crate) fn introspect(fields: &[FieldDescriptor]) -> (FieldKeys, Vec<usize>) {
    let mut order = Vec::with_capacity(fields.len());
    for visibility in [Visibility::Public, Visibility::Private, Visibility::Protected] {
        order.extend(
            fields
                .iter()
                .enumerate()
                .filter(|(_, field)| field.visibility() == visibility)
                .map(|(index, _)| index),
        );
    }

    let names = |visibility: Visibility| {
        fields
            .iter()
            .filter(|field| field.visibility() == visibility)
            .map(|field| field.name().to_string())
            .collect::<Vec<_>>()
    };

    let keys = FieldKeys {
        public: names(Visibility::Public),
        private: names(Visibility::Private),
        protected: names(Visibility::Protected),
        all: order
            .iter()
            .map(|&index| fields[index].name().to_string())
            .collect(),
    };

    (keys, order)
}
