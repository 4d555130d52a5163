//! Prompt templates and their renderer.
//!
//! Templates use a small Handlebars-like syntax:
//! - `{{name}}` is replaced with the argument value (empty when unset)
//! - `{{#if name}}...{{/if}}` keeps its body only when `name` is non-empty
//! - `{{#if name}}...{{else}}...{{/if}}` picks one of two bodies
//!
//! Conditionals may nest.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template source.
    pub template: String,
}

#[derive(Debug, PartialEq)]
enum Node<'a> {
    Text(&'a str),
    Var(&'a str),
    If {
        var: &'a str,
        then: Vec<Node<'a>>,
        otherwise: Vec<Node<'a>>,
    },
}

/// What stopped a parse of a node list.
#[derive(Debug, PartialEq)]
enum Stop {
    Eof,
    Else,
    EndIf,
}

impl PromptTemplate {
    /// Create a new prompt template.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            template: template.into(),
        }
    }

    /// Arguments marked as required.
    pub fn required_arguments(&self) -> impl Iterator<Item = &str> {
        self.arguments
            .iter()
            .filter(|arg| arg.required.unwrap_or(false))
            .map(|arg| arg.name.as_str())
    }

    /// Render the template with the given arguments.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let mut rest = self.template.as_str();
        let (nodes, stop) = parse(&mut rest)?;
        match stop {
            Stop::Eof => {}
            Stop::Else => return Err(PromptError::template("{{else}} outside of {{#if}}")),
            Stop::EndIf => return Err(PromptError::template("{{/if}} without {{#if}}")),
        }

        let mut out = String::with_capacity(self.template.len());
        render_nodes(&nodes, arguments, &mut out);
        Ok(out)
    }
}

fn parse<'a>(rest: &mut &'a str) -> Result<(Vec<Node<'a>>, Stop), PromptError> {
    let mut nodes = Vec::new();

    loop {
        let source: &'a str = *rest;
        let Some(open) = source.find("{{") else {
            if !source.is_empty() {
                nodes.push(Node::Text(source));
            }
            *rest = "";
            return Ok((nodes, Stop::Eof));
        };

        if open > 0 {
            nodes.push(Node::Text(&source[..open]));
        }
        let after_open = &source[open + 2..];
        let close = after_open
            .find("}}")
            .ok_or_else(|| PromptError::template("Unclosed '{{' tag"))?;
        let tag = after_open[..close].trim();
        *rest = &after_open[close + 2..];

        if let Some(var) = tag.strip_prefix("#if ") {
            let var = var.trim();
            let (then, stop) = parse(rest)?;
            let otherwise = match stop {
                Stop::EndIf => Vec::new(),
                Stop::Else => match parse(rest)? {
                    (otherwise, Stop::EndIf) => otherwise,
                    _ => return Err(PromptError::template(format!("Missing {{{{/if}}}} for '{}'", var))),
                },
                Stop::Eof => {
                    return Err(PromptError::template(format!("Missing {{{{/if}}}} for '{}'", var)));
                }
            };
            nodes.push(Node::If {
                var,
                then,
                otherwise,
            });
        } else if tag == "else" {
            return Ok((nodes, Stop::Else));
        } else if tag == "/if" {
            return Ok((nodes, Stop::EndIf));
        } else if tag.is_empty() || tag.starts_with(['#', '/']) {
            return Err(PromptError::template(format!("Unsupported tag '{{{{{}}}}}'", tag)));
        } else {
            nodes.push(Node::Var(tag));
        }
    }
}

fn render_nodes(nodes: &[Node<'_>], arguments: &HashMap<String, String>, out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Var(name) => {
                if let Some(value) = arguments.get(*name) {
                    out.push_str(value);
                }
            }
            Node::If {
                var,
                then,
                otherwise,
            } => {
                let is_set = arguments.get(*var).is_some_and(|v| !v.trim().is_empty());
                render_nodes(if is_set { then } else { otherwise }, arguments, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(template: &str, args: &[(&str, &str)]) -> Result<String, PromptError> {
        let args: HashMap<String, String> = args
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PromptTemplate::new("test", None, vec![], template).render(&args)
    }

    #[test]
    fn test_simple_substitution() {
        assert_eq!(
            render("Zone {{zone}} in {{ view }}", &[("zone", "example.com"), ("view", "default")])
                .unwrap(),
            "Zone example.com in default"
        );
    }

    #[test]
    fn test_missing_variable_renders_empty() {
        assert_eq!(render("[{{mac}}]", &[]).unwrap(), "[]");
    }

    #[test]
    fn test_conditional_with_else() {
        let template = "Use {{#if mac}}MAC {{mac}}{{else}}no MAC{{/if}}.";
        assert_eq!(
            render(template, &[("mac", "00:11:22:33:44:55")]).unwrap(),
            "Use MAC 00:11:22:33:44:55."
        );
        assert_eq!(render(template, &[]).unwrap(), "Use no MAC.");
        assert_eq!(render(template, &[("mac", " ")]).unwrap(), "Use no MAC.");
    }

    #[test]
    fn test_nested_conditionals() {
        let template = "{{#if a}}A{{#if b}}B{{else}}-{{/if}}{{/if}}!";
        assert_eq!(render(template, &[("a", "1"), ("b", "1")]).unwrap(), "AB!");
        assert_eq!(render(template, &[("a", "1")]).unwrap(), "A-!");
        assert_eq!(render(template, &[("b", "1")]).unwrap(), "!");
    }

    #[test]
    fn test_substituted_values_are_not_reparsed() {
        assert_eq!(
            render("{{name}}", &[("name", "{{#if x}}")]).unwrap(),
            "{{#if x}}"
        );
    }

    #[test]
    fn test_malformed_templates() {
        assert!(render("{{#if a}}open", &[]).is_err());
        assert!(render("stray {{/if}}", &[]).is_err());
        assert!(render("stray {{else}}", &[]).is_err());
        assert!(render("{{unclosed", &[]).is_err());
        assert!(render("{{#each items}}", &[]).is_err());
    }
}
