//! Path templates with named placeholders (`/{province}/categories/{category}`).

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::RouteError;

/// One `/`-separated piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Param(String),
}

/// Placeholder values in template order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteParams(Vec<(String, String)>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. Replaces an existing value for `name`.
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for RouteParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// A compiled path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl RouteTemplate {
    /// Compile a template. `/` is the root template with no segments.
    pub fn parse(template: &str) -> Result<Self, RouteError> {
        let invalid = |reason: &str| RouteError::InvalidTemplate {
            template: template.to_string(),
            reason: reason.to_string(),
        };

        let body = template
            .strip_prefix('/')
            .ok_or_else(|| invalid("must start with '/'"))?;

        let mut segments = Vec::new();
        if !body.is_empty() {
            for raw in body.split('/') {
                if raw.is_empty() {
                    return Err(invalid("empty segment"));
                }
                let segment = match raw.strip_prefix('{').and_then(|r| r.strip_suffix('}')) {
                    Some(name) => {
                        if name.is_empty()
                            || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
                        {
                            return Err(invalid("placeholder names must be [A-Za-z0-9_]+"));
                        }
                        if segments.iter().any(|s| matches!(s, Segment::Param(p) if p == name)) {
                            return Err(RouteError::DuplicatePlaceholder {
                                template: template.to_string(),
                                name: name.to_string(),
                            });
                        }
                        Segment::Param(name.to_string())
                    }
                    None if raw.contains(['{', '}']) => {
                        return Err(invalid("braces are only allowed around a whole segment"));
                    }
                    None => Segment::Literal(raw.to_string()),
                };
                segments.push(segment);
            }
        }

        Ok(Self {
            source: template.to_string(),
            segments,
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholder names in order.
    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    pub fn literal_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Literal(_)))
            .count()
    }

    pub fn param_count(&self) -> usize {
        self.segments.len() - self.literal_count()
    }

    /// Template with placeholder names erased, e.g. `/{}/categories/{}`.
    ///
    /// Two templates with the same shape match exactly the same paths.
    pub fn shape(&self) -> String {
        let mut shape = String::new();
        for segment in &self.segments {
            shape.push('/');
            match segment {
                Segment::Literal(lit) => shape.push_str(lit),
                Segment::Param(_) => shape.push_str("{}"),
            }
        }
        if shape.is_empty() {
            shape.push('/');
        }
        shape
    }

    /// Match an unprefixed path against this template.
    ///
    /// One trailing slash is tolerated. Placeholders match exactly one
    /// non-empty segment; literals match case-sensitively.
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let path = path.strip_prefix('/').unwrap_or(path);
        let path = path.strip_suffix('/').unwrap_or(path);

        let parts: Vec<&str> = if path.is_empty() {
            Vec::new()
        } else {
            path.split('/').collect()
        };
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(_) if part.is_empty() => return None,
                Segment::Param(name) => params.insert(name, part),
            }
        }
        Some(params)
    }

    /// Substitute `params` into the template.
    ///
    /// Values must be non-empty and must not contain `/`, otherwise the
    /// rendered path would not match back to the same values.
    pub fn render(&self, params: &RouteParams) -> Result<String, RouteError> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Literal(lit) => path.push_str(lit),
                Segment::Param(name) => {
                    let value = params.get(name).ok_or_else(|| RouteError::MissingParam {
                        template: self.source.clone(),
                        name: name.clone(),
                    })?;
                    if value.is_empty() || value.contains('/') {
                        return Err(RouteError::InvalidParamValue {
                            name: name.clone(),
                            value: value.to_string(),
                        });
                    }
                    path.push_str(value);
                }
            }
        }
        Ok(path)
    }
}

impl std::fmt::Display for RouteTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_root() {
        let t = RouteTemplate::parse("/").unwrap();
        assert!(t.segments().is_empty());
        assert_eq!(t.shape(), "/");
    }

    #[test]
    fn test_parse_mixed() {
        let t = RouteTemplate::parse("/{province}/categories/{category}").unwrap();
        assert_eq!(t.literal_count(), 1);
        assert_eq!(t.param_count(), 2);
        assert_eq!(t.params().collect::<Vec<_>>(), vec!["province", "category"]);
        assert_eq!(t.shape(), "/{}/categories/{}");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            RouteTemplate::parse("cities"),
            Err(RouteError::InvalidTemplate { .. })
        ));
        assert!(matches!(
            RouteTemplate::parse("/a//b"),
            Err(RouteError::InvalidTemplate { .. })
        ));
        assert!(matches!(
            RouteTemplate::parse("/x{id}"),
            Err(RouteError::InvalidTemplate { .. })
        ));
        assert!(matches!(
            RouteTemplate::parse("/{}"),
            Err(RouteError::InvalidTemplate { .. })
        ));
        assert!(matches!(
            RouteTemplate::parse("/{a}/{a}"),
            Err(RouteError::DuplicatePlaceholder { .. })
        ));
    }

    #[test]
    fn test_matches() {
        let t = RouteTemplate::parse("/{province}/categorieen/{category}").unwrap();
        let params = t.matches("/antwerpen/categorieen/meubels").unwrap();
        assert_eq!(params.get("province"), Some("antwerpen"));
        assert_eq!(params.get("category"), Some("meubels"));

        assert!(t.matches("/antwerpen/categories/meubels").is_none());
        assert!(t.matches("/antwerpen/categorieen").is_none());
        assert!(t.matches("/antwerpen/categorieen/meubels/extra").is_none());
    }

    #[test]
    fn test_matches_trailing_slash_and_root() {
        let t = RouteTemplate::parse("/{province}").unwrap();
        assert!(t.matches("/gent/").is_some());
        assert!(t.matches("/").is_none());

        let root = RouteTemplate::parse("/").unwrap();
        assert!(root.matches("/").is_some());
        assert!(root.matches("").is_some());
        assert!(root.matches("/gent").is_none());
    }

    #[test]
    fn test_matches_rejects_empty_param() {
        let t = RouteTemplate::parse("/{province}/{city}").unwrap();
        assert!(t.matches("/gent//").is_none());
    }

    #[test]
    fn test_render_and_match_back() {
        let t = RouteTemplate::parse("/{province}/{city}/{store}").unwrap();
        let params = RouteParams::new()
            .with("province", "luik")
            .with("city", "liege")
            .with("store", "l-armee-du-salut-liege");
        let path = t.render(&params).unwrap();
        assert_eq!(path, "/luik/liege/l-armee-du-salut-liege");
        assert_eq!(t.matches(&path), Some(params));
    }

    #[test]
    fn test_render_errors() {
        let t = RouteTemplate::parse("/{province}").unwrap();
        assert!(matches!(
            t.render(&RouteParams::new()),
            Err(RouteError::MissingParam { .. })
        ));
        assert!(matches!(
            t.render(&RouteParams::new().with("province", "a/b")),
            Err(RouteError::InvalidParamValue { .. })
        ));
        assert!(matches!(
            t.render(&RouteParams::new().with("province", "")),
            Err(RouteError::InvalidParamValue { .. })
        ));
    }

    #[test]
    fn test_params_insert_replaces() {
        let params = RouteParams::new().with("city", "gent").with("city", "brugge");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("city"), Some("brugge"));
    }
}
