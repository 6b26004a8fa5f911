//! Alias resolution.
//!
//! References are written `{!key}` inside string values. Resolution runs in
//! two passes: aliases referencing other aliases are resolved first (unknown
//! keys are left in place), then the resolved table is substituted into prop
//! values, where an unknown key is fatal.

use crate::context::ResolveContext;
use crate::data_model::{value_text, Alias, Definition};
use crate::error::ResolveError;
use crate::stage::Stage;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Pattern of an alias reference; group 1 is the referenced key.
pub static ALIAS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{!([^}]+)\}").expect("alias pattern compiles"));

/// A single `{!key}` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRef {
    /// Full matched text, e.g. `{!color}`
    pub matched: String,
    pub key: String,
}

/// All alias references in `text`, in order of appearance.
pub fn alias_refs(text: &str) -> Vec<AliasRef> {
    ALIAS_PATTERN
        .captures_iter(text)
        .map(|caps| AliasRef {
            matched: caps[0].to_string(),
            key: caps[1].to_string(),
        })
        .collect()
}

/// Resolves alias-to-alias references within the alias table.
#[derive(Debug, Default)]
pub struct NestedAliasStage;

impl Stage for NestedAliasStage {
    fn id(&self) -> &'static str {
        "aliases.nested"
    }

    fn run(&self, definition: Definition, _ctx: &ResolveContext) -> Result<Definition, ResolveError> {
        let resolver = NestedResolver {
            table: &definition.aliases,
        };

        let aliases = definition
            .aliases
            .iter()
            .map(|(key, alias)| {
                let mut stack = vec![key.clone()];
                let value = resolver.resolve(alias.value(), &mut stack)?;
                Ok((key.clone(), alias.clone().with_value(value)))
            })
            .collect::<Result<IndexMap<_, _>, ResolveError>>()?;

        Ok(Definition {
            aliases,
            ..definition
        })
    }
}

struct NestedResolver<'a> {
    table: &'a IndexMap<String, Alias>,
}

impl NestedResolver<'_> {
    /// Depth-first: a referenced alias is fully resolved before substitution.
    /// `stack` holds the keys currently being resolved.
    fn resolve(&self, value: &Value, stack: &mut Vec<String>) -> Result<Value, ResolveError> {
        let Value::String(text) = value else {
            return Ok(value.clone());
        };

        let mut resolved = text.clone();
        for AliasRef { matched, key } in alias_refs(text) {
            let Some(alias) = self.table.get(&key) else {
                continue;
            };
            if stack.contains(&key) {
                let mut chain = stack.clone();
                chain.push(key);
                return Err(ResolveError::CyclicAlias {
                    chain: chain.join(" -> "),
                });
            }

            stack.push(key);
            let inner = self.resolve(alias.value(), stack)?;
            stack.pop();

            resolved = resolved.replacen(&matched, &value_text(&inner), 1);
        }
        Ok(Value::String(resolved))
    }
}

/// Substitutes resolved alias values into prop values.
#[derive(Debug, Default)]
pub struct PropAliasStage;

impl Stage for PropAliasStage {
    fn id(&self) -> &'static str {
        "aliases.props"
    }

    fn run(&self, definition: Definition, _ctx: &ResolveContext) -> Result<Definition, ResolveError> {
        let Definition {
            props,
            aliases,
            global,
            imports,
        } = definition;

        let props = props
            .into_iter()
            .map(|(key, prop)| {
                let substituted = match prop.value() {
                    Value::String(text) => Some(substitute(text, &aliases)?),
                    _ => None,
                };
                match substituted {
                    Some(value) => Ok((key, prop.with_value(Value::String(value)))),
                    None => Ok((key, prop)),
                }
            })
            .collect::<Result<IndexMap<_, _>, ResolveError>>()?;

        Ok(Definition {
            props,
            aliases,
            global,
            imports,
        })
    }
}

fn substitute(text: &str, aliases: &IndexMap<String, Alias>) -> Result<String, ResolveError> {
    let mut resolved = text.to_string();
    for AliasRef { matched, key } in alias_refs(text) {
        let alias = aliases
            .get(&key)
            .ok_or_else(|| ResolveError::AliasNotFound(key.clone()))?;
        resolved = resolved.replacen(&matched, &value_text(alias.value()), 1);
    }

    // An alias may carry a reference the nested pass could not resolve.
    if let Some(dangling) = alias_refs(&resolved)
        .into_iter()
        .find(|r| !aliases.contains_key(&r.key))
    {
        return Err(ResolveError::AliasNotFound(dangling.key));
    }
    Ok(resolved)
}
