use crate::Location;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use inherent::inherent;

/// `...FragmentName @directives`
///
/// The fragment name is never `on`; `... on` always begins an inline
/// fragment.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FragmentSpread<'src> {
    pub fragment_name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub location: Location,
}

#[inherent]
impl AstNode for FragmentSpread<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}
