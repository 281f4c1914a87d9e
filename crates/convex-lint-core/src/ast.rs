//! Syntax model shared by frontends and rules.
//!
//! Frontends lower their parse trees into this closed set of node kinds.
//! Rules only ever read it. Anything a rule does not need to distinguish
//! is kept as [`NodeKind::Other`] so that traversal still reaches the
//! call expressions nested inside it.

use serde::{Deserialize, Serialize};

/// Byte range and start position of a node in its source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset.
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Length of the span in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A lowered source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    /// Top-level nodes in source order.
    pub body: Vec<Node>,
}

impl Program {
    /// Creates a program from its top-level nodes.
    #[must_use]
    pub fn new(body: Vec<Node>) -> Self {
        Self { body }
    }
}

/// A syntax node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// What kind of node this is.
    pub kind: NodeKind,
    /// Where the node sits in the source.
    pub span: Span,
}

/// The node kinds rules can tell apart.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// `foo`
    Identifier(Identifier),
    /// `callee(arg, ...)`
    Call(CallExpression),
    /// `object.property` or `object[property]`
    Member(MemberExpression),
    /// `{ key: value, ... }`
    Object(ObjectExpression),
    /// `() => {}`, `function () {}`, `function named() {}`
    Function(FunctionExpression),
    /// `...expr` in an argument list or array.
    Spread(Box<Node>),
    /// Any other syntax, with its lowered children.
    Other(Other),
}

/// A plain identifier reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// Identifier text.
    pub name: String,
}

/// A call expression.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    /// The expression being called.
    pub callee: Box<Node>,
    /// Arguments in source order.
    pub arguments: Vec<Node>,
}

/// A member access.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpression {
    /// The object being accessed.
    pub object: Box<Node>,
    /// The accessed property. An [`Identifier`] when not computed.
    pub property: Box<Node>,
    /// True for `object[property]`.
    pub computed: bool,
}

impl MemberExpression {
    /// Name of the property for `object.name` accesses.
    ///
    /// Computed accesses and non-identifier properties have no name.
    #[must_use]
    pub fn property_name(&self) -> Option<&str> {
        if self.computed {
            return None;
        }
        self.property.as_identifier()
    }
}

/// An object literal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectExpression {
    /// Members in source order.
    pub members: Vec<ObjectMember>,
}

impl ObjectExpression {
    /// Names of the direct, identifier-keyed properties.
    ///
    /// Spread members, literal keys and computed keys are skipped.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().filter_map(|m| match m {
            ObjectMember::Property(p) => p.key.as_identifier(),
            ObjectMember::Spread(_) => None,
        })
    }

    /// Returns true if a direct identifier-keyed property named `name` exists.
    #[must_use]
    pub fn has_property(&self, name: &str) -> bool {
        self.property_names().any(|n| n == name)
    }
}

/// A member of an object literal.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectMember {
    /// `key: value`, `key`, or `key() {}`
    Property(Property),
    /// `...expr`
    Spread(Node),
}

/// How a property was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// `key: value`
    Init,
    /// `key`
    Shorthand,
    /// `key() {}`
    Method,
}

/// Key of an object property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKey {
    /// `name: ...`
    Identifier(String),
    /// `"name": ...` or `0: ...`
    Literal(String),
    /// `[expr]: ...`
    Computed(Box<Node>),
}

impl PropertyKey {
    /// Key name when written as a bare identifier.
    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Self::Identifier(name) => Some(name),
            Self::Literal(_) | Self::Computed(_) => None,
        }
    }
}

/// A property of an object literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property key.
    pub key: PropertyKey,
    /// Property value. For shorthand properties this is the identifier itself.
    pub value: Node,
    /// How the property was written.
    pub kind: PropertyKind,
    /// Span of the whole property.
    pub span: Span,
}

/// A function literal.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpression {
    /// Name for `function name() {}`.
    pub name: Option<String>,
    /// True for arrow functions.
    pub is_arrow: bool,
    /// Lowered parameters and body.
    pub body: Vec<Node>,
}

/// Syntax the model does not distinguish.
#[derive(Debug, Clone, PartialEq)]
pub struct Other {
    /// Frontend-specific kind name (e.g. `"string"`).
    pub kind: String,
    /// Lowered children.
    pub children: Vec<Node>,
}

impl Node {
    /// Creates a node from a kind and span.
    #[must_use]
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Replaces the span of this node.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// `name`
    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::new(
            NodeKind::Identifier(Identifier { name: name.into() }),
            Span::default(),
        )
    }

    /// `callee(arguments...)`
    #[must_use]
    pub fn call(callee: Node, arguments: Vec<Node>) -> Self {
        Self::new(
            NodeKind::Call(CallExpression {
                callee: Box::new(callee),
                arguments,
            }),
            Span::default(),
        )
    }

    /// `object.property`
    #[must_use]
    pub fn member(object: Node, property: impl Into<String>) -> Self {
        Self::new(
            NodeKind::Member(MemberExpression {
                object: Box::new(object),
                property: Box::new(Self::identifier(property)),
                computed: false,
            }),
            Span::default(),
        )
    }

    /// `object[property]`
    #[must_use]
    pub fn computed_member(object: Node, property: Node) -> Self {
        Self::new(
            NodeKind::Member(MemberExpression {
                object: Box::new(object),
                property: Box::new(property),
                computed: true,
            }),
            Span::default(),
        )
    }

    /// `{ members... }`
    #[must_use]
    pub fn object(members: Vec<ObjectMember>) -> Self {
        Self::new(NodeKind::Object(ObjectExpression { members }), Span::default())
    }

    /// `() => {}`
    #[must_use]
    pub fn arrow(body: Vec<Node>) -> Self {
        Self::new(
            NodeKind::Function(FunctionExpression {
                name: None,
                is_arrow: true,
                body,
            }),
            Span::default(),
        )
    }

    /// `function name() {}`
    #[must_use]
    pub fn function(name: Option<&str>, body: Vec<Node>) -> Self {
        Self::new(
            NodeKind::Function(FunctionExpression {
                name: name.map(String::from),
                is_arrow: false,
                body,
            }),
            Span::default(),
        )
    }

    /// `...inner`
    #[must_use]
    pub fn spread(inner: Node) -> Self {
        Self::new(NodeKind::Spread(Box::new(inner)), Span::default())
    }

    /// Any other syntax.
    #[must_use]
    pub fn other(kind: impl Into<String>, children: Vec<Node>) -> Self {
        Self::new(
            NodeKind::Other(Other {
                kind: kind.into(),
                children,
            }),
            Span::default(),
        )
    }

    /// Identifier name, if this is an identifier.
    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Identifier(id) => Some(&id.name),
            _ => None,
        }
    }

    /// Call expression, if this is a call.
    #[must_use]
    pub fn as_call(&self) -> Option<&CallExpression> {
        match &self.kind {
            NodeKind::Call(call) => Some(call),
            _ => None,
        }
    }

    /// Member expression, if this is a member access.
    #[must_use]
    pub fn as_member(&self) -> Option<&MemberExpression> {
        match &self.kind {
            NodeKind::Member(member) => Some(member),
            _ => None,
        }
    }

    /// Object expression, if this is an object literal.
    #[must_use]
    pub fn as_object(&self) -> Option<&ObjectExpression> {
        match &self.kind {
            NodeKind::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns true for arrow functions and function expressions.
    #[must_use]
    pub fn is_function(&self) -> bool {
        matches!(self.kind, NodeKind::Function(_))
    }
}

impl Property {
    /// `key: value`
    #[must_use]
    pub fn init(key: impl Into<String>, value: Node) -> Self {
        Self {
            key: PropertyKey::Identifier(key.into()),
            value,
            kind: PropertyKind::Init,
            span: Span::default(),
        }
    }

    /// `key`
    #[must_use]
    pub fn shorthand(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            value: Node::identifier(key.clone()),
            key: PropertyKey::Identifier(key),
            kind: PropertyKind::Shorthand,
            span: Span::default(),
        }
    }

    /// `[key]: value`
    #[must_use]
    pub fn computed(key: Node, value: Node) -> Self {
        Self {
            key: PropertyKey::Computed(Box::new(key)),
            value,
            kind: PropertyKind::Init,
            span: Span::default(),
        }
    }
}

impl From<Property> for ObjectMember {
    fn from(p: Property) -> Self {
        Self::Property(p)
    }
}
