//! Indented AST tree dump for debugging.
//!
//! A read-only traversal over the finished tree; it makes no parsing
//! decisions. Infix, prefix and postfix nodes are annotated with the
//! binding strength re-derived from their operator text, which keeps the
//! text-keyed precedence lookup in agreement with the kind-keyed one the
//! parser uses.

use crate::parser::ast::{BlockStatement, Expression, Program, Statement};
use crate::parser::precedence;

/// Stateful pretty-printer; tracks the indent level while walking the tree.
#[derive(Default)]
pub struct AstPrinter {
    indent_level: usize,
}

impl AstPrinter {
    pub fn new() -> Self {
        AstPrinter::default()
    }

    /// Render the whole program as an indented tree.
    pub fn print_program(&mut self, program: &Program) -> String {
        let mut out = String::from("Program\n");
        self.indent_level += 1;
        for stmt in &program.statements {
            out.push_str(&self.indent());
            out.push_str(&self.print_statement(stmt));
            out.push('\n');
        }
        self.indent_level -= 1;
        out
    }

    fn print_statement(&mut self, stmt: &Statement) -> String {
        match stmt {
            Statement::Let {
                name,
                is_array,
                value,
                ..
            } => {
                let brackets = if *is_array { "[]" } else { "" };
                format!(
                    "LetStatement(Name: {}{}, Value: {})",
                    name.value,
                    brackets,
                    self.print_expression(value)
                )
            }
            Statement::Return { value, .. } => match value {
                Some(value) => format!("ReturnStatement(Value: {})", self.print_expression(value)),
                None => "ReturnStatement".to_string(),
            },
            Statement::Expression { expression, .. } => {
                format!("ExpressionStatement({})", self.print_expression(expression))
            }
            Statement::Block(block) => self.print_block(block),
            Statement::If {
                condition,
                consequence,
                alternative,
                ..
            } => {
                let mut out = format!("IfStatement(Condition: {})", self.print_expression(condition));
                out.push_str(&self.labeled_block("Consequence", consequence));
                if let Some(alternative) = alternative {
                    out.push_str(&self.labeled_block("Alternative", alternative));
                }
                out
            }
            Statement::While {
                condition, body, ..
            } => {
                let mut out =
                    format!("WhileStatement(Condition: {})", self.print_expression(condition));
                out.push_str(&self.labeled_block("Body", body));
                out
            }
            Statement::For {
                init,
                condition,
                update,
                body,
                ..
            } => {
                let mut parts = Vec::new();
                if let Some(init) = init {
                    parts.push(format!("Init: {}", self.print_statement(init)));
                }
                if let Some(condition) = condition {
                    parts.push(format!("Condition: {}", self.print_expression(condition)));
                }
                if let Some(update) = update {
                    parts.push(format!("Update: {}", self.print_statement(update)));
                }
                let mut out = format!("ForStatement({})", parts.join(", "));
                out.push_str(&self.labeled_block("Body", body));
                out
            }
            Statement::Function {
                name,
                parameters,
                body,
                ..
            } => {
                let params: Vec<&str> = parameters.iter().map(|p| p.value.as_str()).collect();
                let mut out = format!(
                    "FunctionDeclaration(Name: {}, Parameters: [{}])",
                    name.value,
                    params.join(", ")
                );
                out.push_str(&self.labeled_block("Body", body));
                out
            }
            Statement::Native {
                name,
                parameters,
                return_type,
                ..
            } => {
                let params: Vec<&str> = parameters.iter().map(|p| p.value.as_str()).collect();
                let mut out = format!(
                    "NativeFunctionDeclaration(Name: {}, Parameters: [{}]",
                    name.value,
                    params.join(", ")
                );
                if let Some(return_type) = return_type {
                    out.push_str(&format!(", ReturnType: {}", self.print_expression(return_type)));
                }
                out.push(')');
                out
            }
            Statement::State { name, body, .. } => {
                let mut out = format!("StateDeclaration(Name: {})", name.value);
                out.push_str(&self.labeled_block("Body", body));
                out
            }
            Statement::Tag { name, .. } => format!("TagDeclaration(Name: {})", name.value),
            Statement::Enum { name, members, .. } => {
                let members: Vec<String> = members
                    .iter()
                    .map(|m| match &m.value {
                        Some(value) => {
                            format!("{} = {}", m.name.value, self.print_expression(value))
                        }
                        None => m.name.value.clone(),
                    })
                    .collect();
                match name {
                    Some(name) => format!(
                        "EnumDeclaration(Name: {}, Members: [{}])",
                        name.value,
                        members.join(", ")
                    ),
                    None => format!("EnumDeclaration(Members: [{}])", members.join(", ")),
                }
            }
            Statement::Include { path, .. } => format!("IncludeDirective(Path: {})", path),
            Statement::Define { name, value, .. } => {
                format!(
                    "DefineDirective(Name: {}, Value: {})",
                    name,
                    self.print_expression(value)
                )
            }
            Statement::IfDef {
                condition,
                body,
                else_body,
                ..
            } => {
                let mut out = format!("IfDefDirective(Condition: {})", condition);
                out.push_str(&self.labeled_block("Body", body));
                if let Some(else_body) = else_body {
                    out.push_str(&self.labeled_block("ElseBody", else_body));
                }
                out
            }
        }
    }

    fn print_expression(&mut self, expr: &Expression) -> String {
        match expr {
            Expression::Identifier(ident) => format!("Identifier({})", ident.value),
            Expression::IntegerLiteral { value, .. } => format!("IntegerLiteral({})", value),
            Expression::FloatLiteral { value, .. } => format!("FloatLiteral({})", value),
            Expression::StringLiteral { value, .. } => format!("StringLiteral({:?})", value),
            Expression::CharLiteral { value, .. } => {
                format!("CharLiteral({:?})", *value as char)
            }
            Expression::BooleanLiteral { value, .. } => format!("BooleanLiteral({})", value),
            Expression::NullLiteral { .. } => "NullLiteral".to_string(),
            Expression::ArrayLiteral { elements, .. } => {
                let elements: Vec<String> =
                    elements.iter().map(|e| self.print_expression(e)).collect();
                format!("ArrayLiteral([{}])", elements.join(", "))
            }
            Expression::FunctionLiteral { parameters, .. } => {
                let params: Vec<&str> = parameters.iter().map(|p| p.value.as_str()).collect();
                format!("FunctionLiteral(Parameters: [{}])", params.join(", "))
            }
            Expression::Prefix {
                operator, right, ..
            } => format!(
                "PrefixExpression(Operator: {:?}, Right: {})",
                operator,
                self.print_expression(right)
            ),
            Expression::Infix {
                left,
                operator,
                right,
                ..
            } => format!(
                "InfixExpression(Operator: {:?} [{:?}], Left: {}, Right: {})",
                operator,
                precedence::of_operator(operator),
                self.print_expression(left),
                self.print_expression(right)
            ),
            Expression::Postfix { operator, left, .. } => format!(
                "PostfixExpression(Operator: {:?} [{:?}], Left: {})",
                operator,
                precedence::of_operator(operator),
                self.print_expression(left)
            ),
            Expression::Call {
                function,
                arguments,
                ..
            } => {
                let args: Vec<String> = arguments.iter().map(|a| self.print_expression(a)).collect();
                format!(
                    "CallExpression(Function: {}, Arguments: [{}])",
                    self.print_expression(function),
                    args.join(", ")
                )
            }
            Expression::Index { left, index, .. } => format!(
                "IndexExpression(Left: {}, Index: {})",
                self.print_expression(left),
                self.print_expression(index)
            ),
            Expression::TypeName { name, .. } => format!("TypeName({})", name),
            Expression::ArrayType { element, .. } => {
                format!("ArrayType(ElementType: {})", self.print_expression(element))
            }
            Expression::FunctionType {
                parameters,
                return_type,
                ..
            } => {
                let params: Vec<String> =
                    parameters.iter().map(|p| self.print_expression(p)).collect();
                match return_type {
                    Some(return_type) => format!(
                        "FunctionType(Parameters: [{}], ReturnType: {})",
                        params.join(", "),
                        self.print_expression(return_type)
                    ),
                    None => format!("FunctionType(Parameters: [{}])", params.join(", ")),
                }
            }
            Expression::TaggedType { tag, ty, .. } => format!(
                "TaggedType(Tag: {}, Type: {})",
                tag.value,
                self.print_expression(ty)
            ),
        }
    }

    /// A block rendered on the following lines, one indent level deeper,
    /// introduced by a label.
    fn labeled_block(&mut self, label: &str, block: &BlockStatement) -> String {
        let mut out = String::new();
        self.indent_level += 1;
        out.push('\n');
        out.push_str(&self.indent());
        out.push_str(label);
        out.push_str(": ");
        out.push_str(&self.print_block(block));
        self.indent_level -= 1;
        out
    }

    fn print_block(&mut self, block: &BlockStatement) -> String {
        let mut out = String::from("BlockStatement");
        self.indent_level += 1;
        for stmt in &block.statements {
            out.push('\n');
            out.push_str(&self.indent());
            out.push_str(&self.print_statement(stmt));
        }
        self.indent_level -= 1;
        out
    }

    fn indent(&self) -> String {
        "  ".repeat(self.indent_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse::Parser;

    fn dump(input: &str) -> String {
        let mut parser = Parser::new(input);
        let program = parser.parse_program();
        assert!(
            parser.errors().is_empty(),
            "parser errors: {:?}",
            parser.errors()
        );
        AstPrinter::new().print_program(&program)
    }

    #[test]
    fn test_let_statement_dump() {
        let out = dump("new x = 5;");
        assert_eq!(
            out,
            "Program\n  LetStatement(Name: x, Value: IntegerLiteral(5))\n"
        );
    }

    #[test]
    fn test_infix_dump_carries_precedence() {
        let out = dump("new x = 1 + 2;");
        assert!(out.contains("InfixExpression(Operator: \"+\" [Sum]"), "{}", out);
    }

    #[test]
    fn test_nested_blocks_indent() {
        let out = dump("if (x) { return 1; }");
        assert!(out.contains("IfStatement(Condition: Identifier(x))"), "{}", out);
        assert!(
            out.contains("    Consequence: BlockStatement\n      ReturnStatement"),
            "{}",
            out
        );
    }

    #[test]
    fn test_postfix_dump() {
        let out = dump("i++;");
        assert!(
            out.contains("PostfixExpression(Operator: \"++\" [Postfix], Left: Identifier(i))"),
            "{}",
            out
        );
    }
}
