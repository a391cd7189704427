//! AST node definitions and the construction interface.
//!
//! Trees are built once by a front end (or by hand) and only read during
//! evaluation. Each non-leaf node owns its children exclusively; function
//! bodies handed to [`Environment::register_func`] are shared through an
//! `Arc` instead.
//!
//! [`Environment::register_func`]: crate::Environment::register_func

use std::fmt;

/// An integer constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    /// The constant value
    pub value: i64,
}

/// A variable read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Access {
    /// The variable name
    pub name: String,
}

/// A declare-or-update of a variable in the current scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assign {
    /// The variable name
    pub name: String,
    /// The value expression
    pub expr: Box<Node>,
}

/// Evaluates its child and writes it to the output channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Print {
    /// The printed expression
    pub expr: Box<Node>,
}

/// Invocation of a registered function body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// The function name
    pub name: String,
}

/// Single-branch conditional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct If {
    /// Condition, true when non-zero
    pub cond: Box<Node>,
    /// Branch evaluated in its own scope when the condition holds
    pub then_branch: Box<Node>,
}

/// Sequence of nodes evaluated in their own scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    children: Vec<Node>,
}

/// Integer addition, left operand first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Add {
    /// Left operand
    pub left: Box<Node>,
    /// Right operand
    pub right: Box<Node>,
}

/// A node of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Integer constant
    Literal(Literal),
    /// Variable read
    Access(Access),
    /// Variable write
    Assign(Assign),
    /// Side-effecting read
    Print(Print),
    /// Function call
    Call(Call),
    /// Conditional without else
    If(If),
    /// Scoped sequence
    Block(Block),
    /// Addition
    Add(Add),
    /// Inert placeholder
    NoOp,
}

impl Block {
    /// Create an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a block holding a single first child.
    pub fn with_first(first: impl Into<Node>) -> Self {
        Self {
            children: vec![first.into()],
        }
    }

    /// Append a child after the existing ones.
    pub fn add(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// The children, in insertion order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if the block has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl FromIterator<Node> for Block {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Builders
// ═══════════════════════════════════════════════════════════════════════

impl Node {
    /// `Literal(value)`
    pub fn literal(value: i64) -> Self {
        Node::Literal(Literal { value })
    }

    /// `Access(name)`
    pub fn access(name: impl Into<String>) -> Self {
        Node::Access(Access { name: name.into() })
    }

    /// `Assign(name, expr)`
    pub fn assign(name: impl Into<String>, expr: impl Into<Node>) -> Self {
        Node::Assign(Assign {
            name: name.into(),
            expr: Box::new(expr.into()),
        })
    }

    /// `Print(expr)`
    pub fn print(expr: impl Into<Node>) -> Self {
        Node::Print(Print {
            expr: Box::new(expr.into()),
        })
    }

    /// `Call(name)`
    pub fn call(name: impl Into<String>) -> Self {
        Node::Call(Call { name: name.into() })
    }

    /// `If(cond, then_branch)`
    pub fn if_then(cond: impl Into<Node>, then_branch: impl Into<Node>) -> Self {
        Node::If(If {
            cond: Box::new(cond.into()),
            then_branch: Box::new(then_branch.into()),
        })
    }

    /// `Block(children)`
    pub fn block(children: impl IntoIterator<Item = Node>) -> Self {
        Node::Block(children.into_iter().collect())
    }

    /// `Add(left, right)`
    pub fn add(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Node::Add(Add {
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        })
    }

    /// `NoOp`
    pub fn noop() -> Self {
        Node::NoOp
    }

    /// Get a human-readable name for the node kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Literal(_) => "literal",
            Node::Access(_) => "access",
            Node::Assign(_) => "assign",
            Node::Print(_) => "print",
            Node::Call(_) => "call",
            Node::If(_) => "if",
            Node::Block(_) => "block",
            Node::Add(_) => "add",
            Node::NoOp => "noop",
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Node {
                fn from(node: $variant) -> Self {
                    Node::$variant(node)
                }
            }
        )*
    };
}

impl_from_variant!(Literal, Access, Assign, Print, Call, If, Block, Add);

// ═══════════════════════════════════════════════════════════════════════
// Display
// ═══════════════════════════════════════════════════════════════════════

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(lit) => write!(f, "{}", lit.value),
            Node::Access(access) => write!(f, "{}", access.name),
            Node::Assign(assign) => write!(f, "(assign {} {})", assign.name, assign.expr),
            Node::Print(print) => write!(f, "(print {})", print.expr),
            Node::Call(call) => write!(f, "(call {})", call.name),
            Node::If(if_node) => write!(f, "(if {} {})", if_node.cond, if_node.then_branch),
            Node::Block(block) => {
                write!(f, "(block")?;
                for child in block.children() {
                    write!(f, " {}", child)?;
                }
                write!(f, ")")
            }
            Node::Add(add) => write!(f, "(+ {} {})", add.left, add.right),
            Node::NoOp => write!(f, "(noop)"),
        }
    }
}
