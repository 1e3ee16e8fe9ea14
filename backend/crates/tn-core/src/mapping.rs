//! Storage mapping for entities.
//!
//! Describes how a record's fields correspond to table columns and how its
//! one-to-many relationships are owned, fetched and cascaded. The record types
//! stay plain data; the storage layer reads these tables to decide what to
//! write, what to load with the owner, and what to remove when the owner goes.

use std::fmt;

/// When a related collection is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchType {
    /// Fetched together with the owner.
    Eager,
    /// Fetched only when explicitly requested.
    Lazy,
}

impl FetchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eager => "eager",
            Self::Lazy => "lazy",
        }
    }
}

impl fmt::Display for FetchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which owner operations propagate to dependents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CascadeType {
    /// Saves and deletes of the owner apply to its dependents.
    All,
    /// Nothing propagates.
    None,
}

impl CascadeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::None => "none",
        }
    }
}

impl fmt::Display for CascadeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Field name on the record.
    pub field: &'static str,
    pub column: &'static str,
    pub unique: bool,
    /// `false` for transient fields that only live in memory.
    pub persisted: bool,
}

/// A one-to-many relationship owned by the dependent side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationMapping {
    /// Field name on the owner.
    pub field: &'static str,
    /// Table holding the dependents.
    pub table: &'static str,
    /// Column on the dependent table referencing the owner's id.
    pub back_reference: &'static str,
    pub fetch: FetchType,
    pub cascade: CascadeType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityMapping {
    pub table: &'static str,
    pub id_column: &'static str,
    pub columns: &'static [ColumnMapping],
    pub relations: &'static [RelationMapping],
}

impl EntityMapping {
    pub fn persisted_columns(&self) -> impl Iterator<Item = &ColumnMapping> {
        self.columns.iter().filter(|c| c.persisted)
    }

    pub fn unique_columns(&self) -> impl Iterator<Item = &ColumnMapping> {
        self.columns.iter().filter(|c| c.persisted && c.unique)
    }

    pub fn column(&self, field: &str) -> Option<&ColumnMapping> {
        self.columns.iter().find(|c| c.field == field)
    }

    pub fn relation(&self, field: &str) -> Option<&RelationMapping> {
        self.relations.iter().find(|r| r.field == field)
    }

    pub fn eager_relations(&self) -> impl Iterator<Item = &RelationMapping> {
        self.relations
            .iter()
            .filter(|r| r.fetch == FetchType::Eager)
    }

    pub fn cascading_relations(&self) -> impl Iterator<Item = &RelationMapping> {
        self.relations
            .iter()
            .filter(|r| r.cascade == CascadeType::All)
    }

    /// Comma separated persisted column names, in declaration order.
    pub fn select_list(&self) -> String {
        self.persisted_columns()
            .map(|c| c.column)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub const USER_MAPPING: EntityMapping = EntityMapping {
    table: "users",
    id_column: "id",
    columns: &[
        ColumnMapping {
            field: "id",
            column: "id",
            unique: true,
            persisted: true,
        },
        ColumnMapping {
            field: "username",
            column: "username",
            unique: false,
            persisted: true,
        },
        ColumnMapping {
            field: "email",
            column: "email",
            unique: true,
            persisted: true,
        },
        ColumnMapping {
            field: "password",
            column: "password",
            unique: false,
            persisted: true,
        },
        ColumnMapping {
            field: "logged_in",
            column: "logged_in",
            unique: false,
            persisted: false,
        },
    ],
    relations: &[
        RelationMapping {
            field: "posts",
            table: "posts",
            back_reference: "user_id",
            fetch: FetchType::Eager,
            cascade: CascadeType::All,
        },
        RelationMapping {
            field: "votes",
            table: "votes",
            back_reference: "user_id",
            fetch: FetchType::Lazy,
            cascade: CascadeType::All,
        },
        RelationMapping {
            field: "comments",
            table: "comments",
            back_reference: "user_id",
            fetch: FetchType::Lazy,
            cascade: CascadeType::All,
        },
    ],
};
