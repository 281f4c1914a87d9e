//! Lowering from tree-sitter parse trees into the convex-lint syntax model.
//!
//! Only the shapes the rules distinguish get a dedicated [`NodeKind`];
//! everything else becomes [`NodeKind::Other`] with its named children, so
//! traversal still reaches every nested call. Parentheses leave no node
//! behind, and a tagged template is not a call.

use convex_lint_core::{
    CallExpression, FunctionExpression, Identifier, MemberExpression, Node, NodeKind,
    ObjectExpression, ObjectMember, Other, ParseError, Program, Property, PropertyKey,
    PropertyKind, Span,
};
use tree_sitter::Node as TsNode;

/// Deepest tree level that is lowered. Anything below fails the file with
/// [`ParseError::TooDeep`].
pub(crate) const MAX_DEPTH: usize = 512;

/// Lowers a parsed `program` root.
pub(crate) fn lower_program(root: TsNode<'_>, src: &[u8]) -> Result<Program, ParseError> {
    let mut lowerer = Lowerer {
        src,
        depth: 0,
        too_deep: None,
    };
    let body = lowerer.lower_children(root);

    match lowerer.too_deep {
        Some(span) => Err(ParseError::TooDeep {
            line: span.line,
            column: span.column,
            limit: MAX_DEPTH,
        }),
        None => Ok(Program::new(body)),
    }
}

fn span(node: TsNode<'_>) -> Span {
    let start = node.start_position();
    Span::new(
        node.start_byte(),
        node.end_byte(),
        start.row + 1,
        start.column + 1,
    )
}

fn named_children(node: TsNode<'_>) -> Vec<TsNode<'_>> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|c| !c.is_extra())
        .collect();
    children
}

struct Lowerer<'s> {
    src: &'s [u8],
    depth: usize,
    /// First node found past [`MAX_DEPTH`].
    too_deep: Option<Span>,
}

impl Lowerer<'_> {
    fn text(&self, node: TsNode<'_>) -> String {
        node.utf8_text(self.src).unwrap_or("").to_string()
    }

    fn lower_children(&mut self, node: TsNode<'_>) -> Vec<Node> {
        let mut lowered = Vec::new();
        for child in named_children(node) {
            lowered.push(self.lower(child));
        }
        lowered
    }

    fn lower(&mut self, node: TsNode<'_>) -> Node {
        if self.depth >= MAX_DEPTH {
            self.too_deep.get_or_insert(span(node));
            return Node::other(node.kind(), Vec::new()).with_span(span(node));
        }

        self.depth += 1;
        let lowered = self.lower_node(node);
        self.depth -= 1;
        lowered
    }

    fn lower_node(&mut self, node: TsNode<'_>) -> Node {
        let kind = match node.kind() {
            "identifier"
            | "property_identifier"
            | "shorthand_property_identifier"
            | "private_property_identifier" => NodeKind::Identifier(Identifier {
                name: self.text(node),
            }),
            "parenthesized_expression" => {
                if let [inner] = named_children(node).as_slice() {
                    return self.lower(*inner);
                }
                self.other(node)
            }
            "call_expression" => self.lower_call(node),
            "member_expression" => self.lower_member(node),
            "subscript_expression" => self.lower_subscript(node),
            "object" => NodeKind::Object(self.lower_object(node)),
            "arrow_function" => NodeKind::Function(FunctionExpression {
                name: None,
                is_arrow: true,
                body: self.lower_children(node),
            }),
            "function_expression" | "function" | "generator_function" => {
                NodeKind::Function(FunctionExpression {
                    name: node.child_by_field_name("name").map(|n| self.text(n)),
                    is_arrow: false,
                    body: self.lower_children(node),
                })
            }
            "spread_element" => match named_children(node).first() {
                Some(inner) => NodeKind::Spread(Box::new(self.lower(*inner))),
                None => self.other(node),
            },
            _ => self.other(node),
        };

        Node::new(kind, span(node))
    }

    fn other(&mut self, node: TsNode<'_>) -> NodeKind {
        NodeKind::Other(Other {
            kind: node.kind().to_string(),
            children: self.lower_children(node),
        })
    }

    fn lower_call(&mut self, node: TsNode<'_>) -> NodeKind {
        let Some(function) = node.child_by_field_name("function") else {
            return self.other(node);
        };

        // fn`...` shares the call_expression kind but is a tagged template
        let arguments = match node.child_by_field_name("arguments") {
            Some(args) if args.kind() == "arguments" => self.lower_children(args),
            Some(_) => return self.other(node),
            None => Vec::new(),
        };

        NodeKind::Call(CallExpression {
            callee: Box::new(self.lower(function)),
            arguments,
        })
    }

    fn lower_member(&mut self, node: TsNode<'_>) -> NodeKind {
        let (Some(object), Some(property)) = (
            node.child_by_field_name("object"),
            node.child_by_field_name("property"),
        ) else {
            return self.other(node);
        };

        NodeKind::Member(MemberExpression {
            object: Box::new(self.lower(object)),
            property: Box::new(self.lower(property)),
            computed: false,
        })
    }

    fn lower_subscript(&mut self, node: TsNode<'_>) -> NodeKind {
        let (Some(object), Some(index)) = (
            node.child_by_field_name("object"),
            node.child_by_field_name("index"),
        ) else {
            return self.other(node);
        };

        NodeKind::Member(MemberExpression {
            object: Box::new(self.lower(object)),
            property: Box::new(self.lower(index)),
            computed: true,
        })
    }

    fn lower_object(&mut self, node: TsNode<'_>) -> ObjectExpression {
        let mut members = Vec::new();
        for member in named_children(node) {
            if let Some(lowered) = self.lower_object_member(member) {
                members.push(lowered);
            }
        }
        ObjectExpression { members }
    }

    fn lower_object_member(&mut self, member: TsNode<'_>) -> Option<ObjectMember> {
        match member.kind() {
            "pair" => {
                let key = member.child_by_field_name("key")?;
                let value = member.child_by_field_name("value")?;
                Some(ObjectMember::Property(Property {
                    key: self.lower_key(key),
                    value: self.lower(value),
                    kind: PropertyKind::Init,
                    span: span(member),
                }))
            }
            "shorthand_property_identifier" => {
                let name = self.text(member);
                Some(ObjectMember::Property(Property {
                    key: PropertyKey::Identifier(name.clone()),
                    value: Node::new(NodeKind::Identifier(Identifier { name }), span(member)),
                    kind: PropertyKind::Shorthand,
                    span: span(member),
                }))
            }
            "method_definition" => {
                let key = member.child_by_field_name("name")?;
                let mut body = Vec::new();
                for child in named_children(member) {
                    if child.id() != key.id() {
                        body.push(self.lower(child));
                    }
                }
                Some(ObjectMember::Property(Property {
                    key: self.lower_key(key),
                    value: Node::new(
                        NodeKind::Function(FunctionExpression {
                            name: None,
                            is_arrow: false,
                            body,
                        }),
                        span(member),
                    ),
                    kind: PropertyKind::Method,
                    span: span(member),
                }))
            }
            "spread_element" => {
                let inner = *named_children(member).first()?;
                Some(ObjectMember::Spread(self.lower(inner)))
            }
            _ => None,
        }
    }

    fn lower_key(&mut self, key: TsNode<'_>) -> PropertyKey {
        match key.kind() {
            "property_identifier" | "private_property_identifier" => {
                PropertyKey::Identifier(self.text(key))
            }
            "computed_property_name" => match named_children(key).first() {
                Some(expr) => PropertyKey::Computed(Box::new(self.lower(*expr))),
                None => PropertyKey::Literal(self.text(key)),
            },
            "string" => PropertyKey::Literal(
                self.text(key)
                    .trim_matches(|c| c == '"' || c == '\'')
                    .to_string(),
            ),
            _ => PropertyKey::Literal(self.text(key)),
        }
    }
}
