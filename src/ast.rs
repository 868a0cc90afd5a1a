use std::fmt;

/// One parsed relation definition: a name plus its member list, in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErdExpression {
    pub name: String,
    pub members: Vec<Ref>,
}

impl ErdExpression {
    /// A relation with at least one cardinality-bearing member is a
    /// relationship.
    pub fn is_relationship(&self) -> bool {
        self.members.iter().any(Ref::is_entity_ref)
    }

    pub fn is_entity_type(&self) -> bool {
        !self.is_relationship()
    }
}

/// A member of a relation: either a reference to another entity (when
/// `cardinality` is present) or an ordinary attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ref {
    pub attribute: Attribute,
    pub cardinality: Option<MinMax>,
}

impl Ref {
    pub fn name(&self) -> &str {
        self.attribute.name()
    }

    pub fn is_entity_ref(&self) -> bool {
        self.cardinality.is_some()
    }

    pub fn is_primary_key(&self) -> bool {
        self.attribute.is_primary_key()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    /// Written `_name_`.
    PrimaryKey(String),
    Plain(String),
}

impl Attribute {
    pub fn name(&self) -> &str {
        match self {
            Attribute::PrimaryKey(name) | Attribute::Plain(name) => name,
        }
    }

    pub fn is_primary_key(&self) -> bool {
        matches!(self, Attribute::PrimaryKey(_))
    }
}

/// Cardinality in `[min,max]` notation. The grammar does not require
/// min <= max.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinMax {
    pub min: CardinalityBound,
    pub max: CardinalityBound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardinalityBound {
    Bounded(u64),
    Unbounded,
}

impl fmt::Display for CardinalityBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardinalityBound::Bounded(n) => write!(f, "{n}"),
            CardinalityBound::Unbounded => f.write_str("*"),
        }
    }
}
