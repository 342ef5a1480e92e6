//! Static descriptions of record layouts.
//!
//! The line format carries no field names and no type markers.
//! Token positions are recovered from the schema alone,
//! so the traversal order computed here is the only thing
//! that ties encoded tokens to fields.

/// Kind of value a field holds.
///
/// Every kind is null-capable when the field type is wrapped in `Option`.
#[derive(Clone, Copy, Debug)]
pub enum Kind {
    Bool,
    I32,
    I64,

    /// Lossy, scaled by [`F32_PRECISION`](crate::wire::F32_PRECISION).
    F32,

    /// Lossy, scaled by [`F64_PRECISION`](crate::wire::F64_PRECISION).
    F64,
    Str,

    /// Enumeration with variant names in declaration order.
    Enum(&'static [&'static str]),

    /// Nested record expanded in place.
    Record(&'static Schema),
}

/// Single field descriptor.
#[derive(Clone, Copy, Debug)]
pub struct Field {
    /// Name of the field.
    /// Breaks ordering ties between fields without explicit order.
    pub name: &'static str,

    /// Explicit order hint.
    pub order: Option<u32>,

    pub kind: Kind,
}

impl Field {
    #[must_use]
    pub const fn new(name: &'static str, kind: Kind) -> Self {
        Field {
            name,
            order: None,
            kind,
        }
    }

    #[must_use]
    pub const fn with_order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }
}

/// Errors in schema construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// Record without fields has no tokens to occupy.
    #[error("record has no eligible fields")]
    Empty,

    /// Two fields share explicit order.
    #[error("explicit order {0} is used by more than one field")]
    DuplicateOrder(u32),

    /// Two fields share a name.
    #[error("field `{0}` is declared more than once")]
    DuplicateName(&'static str),
}

/// Ordered description of a record type's fields.
///
/// Schemas are constants.
/// Nested schemas are referenced by `&'static Schema`,
/// so a cyclic schema fails to compile.
#[derive(Clone, Copy, Debug)]
pub struct Schema {
    name: &'static str,
    fields: &'static [Field],
    order: &'static [usize],
}

impl Schema {
    /// Creates new schema from fields in declaration order
    /// and traversal order produced by [`resolve_order`].
    ///
    /// # Panics
    ///
    /// Panics if `order` is not a permutation of field indices.
    /// In const context this is a compile error.
    #[must_use]
    pub const fn new(
        name: &'static str,
        fields: &'static [Field],
        order: &'static [usize],
    ) -> Self {
        assert!(
            fields.len() == order.len(),
            "order must list every field exactly once"
        );

        let mut i = 0;
        while i < order.len() {
            assert!(order[i] < fields.len(), "order refers to missing field");
            let mut j = i + 1;
            while j < order.len() {
                assert!(order[i] != order[j], "order lists field twice");
                j += 1;
            }
            i += 1;
        }

        Schema {
            name,
            fields,
            order,
        }
    }

    /// Name of the record type.
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Fields in declaration order.
    #[inline(always)]
    pub const fn fields(&self) -> &'static [Field] {
        self.fields
    }

    /// Indices into [`Schema::fields`] in traversal order.
    #[inline(always)]
    pub const fn order(&self) -> &'static [usize] {
        self.order
    }

    /// Iterates over fields in traversal order
    /// together with their declaration indices.
    pub fn ordered(&self) -> impl Iterator<Item = (usize, &'static Field)> + '_ {
        let fields = self.fields;
        self.order.iter().map(move |&idx| (idx, &fields[idx]))
    }

    /// Number of tokens a record occupies when all its values are present.
    /// Every absent value takes exactly one token instead.
    pub fn token_count(&self) -> usize {
        self.fields
            .iter()
            .map(|field| match field.kind {
                Kind::Record(schema) => schema.token_count(),
                _ => 1,
            })
            .sum()
    }
}

/// Validates field set before ordering.
///
/// # Errors
///
/// Returns [`SchemaError`] if there are no fields
/// or two fields share explicit order or name.
pub const fn check_fields(fields: &[Field]) -> Result<(), SchemaError> {
    if fields.is_empty() {
        return Err(SchemaError::Empty);
    }

    let mut i = 0;
    while i < fields.len() {
        let mut j = i + 1;
        while j < fields.len() {
            if str_eq(fields[i].name, fields[j].name) {
                return Err(SchemaError::DuplicateName(fields[i].name));
            }
            if let (Some(a), Some(b)) = (fields[i].order, fields[j].order) {
                if a == b {
                    return Err(SchemaError::DuplicateOrder(a));
                }
            }
            j += 1;
        }
        i += 1;
    }

    Ok(())
}

/// Computes traversal order of fields.
///
/// Fields with explicit order come first, ascending by order.
/// The rest follow, sorted by name.
/// Returned array holds declaration indices.
///
/// # Panics
///
/// Panics if [`check_fields`] fails.
/// In const context this is a compile error.
#[must_use]
pub const fn resolve_order<const N: usize>(fields: &[Field; N]) -> [usize; N] {
    match check_fields(fields) {
        Ok(()) => {}
        Err(SchemaError::Empty) => panic!("record has no eligible fields"),
        Err(SchemaError::DuplicateOrder(_)) => {
            panic!("explicit order is used by more than one field")
        }
        Err(SchemaError::DuplicateName(_)) => panic!("field is declared more than once"),
    }

    let mut order = [0; N];
    let mut i = 0;
    while i < N {
        order[i] = i;
        i += 1;
    }

    // Insertion sort. Field sets are small and const fn can't call `sort`.
    let mut i = 1;
    while i < N {
        let mut j = i;
        while j > 0 && precedes(&fields[order[j]], &fields[order[j - 1]]) {
            let tmp = order[j];
            order[j] = order[j - 1];
            order[j - 1] = tmp;
            j -= 1;
        }
        i += 1;
    }

    order
}

const fn precedes(lhs: &Field, rhs: &Field) -> bool {
    match (lhs.order, rhs.order) {
        (Some(a), Some(b)) => a < b,
        (Some(_), None) => true,
        (None, Some(_)) => false,
        (None, None) => str_less(lhs.name, rhs.name),
    }
}

const fn str_less(lhs: &str, rhs: &str) -> bool {
    let (lhs, rhs) = (lhs.as_bytes(), rhs.as_bytes());
    let mut i = 0;
    while i < lhs.len() && i < rhs.len() {
        if lhs[i] != rhs[i] {
            return lhs[i] < rhs[i];
        }
        i += 1;
    }
    lhs.len() < rhs.len()
}

const fn str_eq(lhs: &str, rhs: &str) -> bool {
    lhs.len() == rhs.len() && !str_less(lhs, rhs) && !str_less(rhs, lhs)
}
