use std::collections::HashMap;

use itertools::Itertools;

use crate::{Error, Result, Token};

#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Literal(String),
    Ref(Vec<String>),
}

peg::parser! {
  grammar value_parser() for str {
    rule reference() -> Segment
        = "{" v:($((!"}" !"." [_])+) ++ ".") "}" { Segment::Ref(v.iter().map(|x| x.to_string()).collect()) }

    rule literal() -> Segment
        = v:$((!"{" [_])+) { Segment::Literal(v.to_string()) }

    pub(crate) rule value() -> Vec<Segment> = (reference() / literal())*
  }
}

fn parse(token: &Token) -> Result<Vec<Segment>> {
    value_parser::value(&token.value).map_err(|source| Error::MalformedReference {
        token: token.path.join("."),
        value: token.value.clone(),
        source,
    })
}

/// Replaces every `{a.b.c}` reference in the token values with the value of
/// the token at that path, following chains of aliases.
pub(crate) fn resolve_aliases(tokens: &mut [Token]) -> Result<()> {
    let segments = tokens.iter().map(parse).collect::<Result<Vec<_>>>()?;
    let references = segments
        .iter()
        .flatten()
        .filter(|segment| matches!(segment, Segment::Ref(_)))
        .count();
    if references == 0 {
        return Ok(());
    }

    let mut resolver = Resolver {
        tokens: &*tokens,
        index: tokens
            .iter()
            .enumerate()
            .map(|(i, token)| (token.path.join("."), i))
            .collect(),
        segments,
        resolved: vec![None; tokens.len()],
    };
    let values = (0..tokens.len())
        .map(|i| resolver.resolve(i, &mut Vec::new()))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(references, "resolved token aliases");

    for (token, value) in tokens.iter_mut().zip(values) {
        token.value = value;
    }
    Ok(())
}

struct Resolver<'a> {
    tokens: &'a [Token],
    index: HashMap<String, usize>,
    segments: Vec<Vec<Segment>>,
    resolved: Vec<Option<String>>,
}
impl Resolver<'_> {
    fn resolve(&mut self, i: usize, stack: &mut Vec<usize>) -> Result<String> {
        if let Some(value) = &self.resolved[i] {
            return Ok(value.clone());
        }
        if let Some(start) = stack.iter().position(|&j| j == i) {
            let chain = stack[start..]
                .iter()
                .chain([i].iter())
                .map(|&j| self.tokens[j].path.join("."))
                .join(" -> ");
            return Err(Error::CircularReference { chain });
        }

        stack.push(i);
        let mut value = String::new();
        for segment in self.segments[i].clone() {
            match segment {
                Segment::Literal(text) => value.push_str(&text),
                Segment::Ref(path) => {
                    let target = self.lookup(&path).ok_or_else(|| Error::UnknownReference {
                        token: self.tokens[i].path.join("."),
                        reference: path.join("."),
                    })?;
                    value.push_str(&self.resolve(target, stack)?);
                }
            }
        }
        stack.pop();

        self.resolved[i] = Some(value.clone());
        Ok(value)
    }

    // Older sources spell references as `{a.b.c.value}`.
    fn lookup(&self, path: &[String]) -> Option<usize> {
        self.index.get(&path.join(".")).copied().or_else(|| match path {
            [rest @ .., last] if last == "value" || last == "$value" => {
                self.index.get(&rest.join(".")).copied()
            }
            _ => None,
        })
    }
}

#[test]
fn test() {
    assert_eq!(
        value_parser::value("{hello.world}").unwrap(),
        vec![Segment::Ref(vec!["hello".to_string(), "world".to_string()])]
    );
    assert_eq!(
        value_parser::value("#57068C").unwrap(),
        vec![Segment::Literal("#57068C".to_string())]
    );
    assert_eq!(value_parser::value("").unwrap(), vec![]);
    assert_eq!(
        value_parser::value("1px solid {nyulh.color.border}").unwrap(),
        vec![
            Segment::Literal("1px solid ".to_string()),
            Segment::Ref(vec![
                "nyulh".to_string(),
                "color".to_string(),
                "border".to_string()
            ]),
        ]
    );
    assert_eq!(
        value_parser::value("calc({a} * 2)").unwrap(),
        vec![
            Segment::Literal("calc(".to_string()),
            Segment::Ref(vec!["a".to_string()]),
            Segment::Literal(" * 2)".to_string()),
        ]
    );
    assert!(value_parser::value("{nyulh.color").is_err());
    assert!(value_parser::value("{}").is_err());
    assert!(value_parser::value("{a..b}").is_err());
}
