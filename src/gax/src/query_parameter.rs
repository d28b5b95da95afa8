// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// An ordered collection of query parameters.
///
/// The request builders collect the query parameters set by the application
/// (e.g. `ifGenerationMatch`, `valueInputOption`), and any additional
/// parameters the application may need, and add them to the HTTP request.
///
/// Parameters are kept in insertion order. [set][QueryParameters::set]
/// replaces any existing values with the same name, while
/// [append][QueryParameters::append] keeps them, which is how repeated
/// parameters (e.g. `ranges`) are represented.
///
/// # Example
/// ```
/// # use google_cloud_rest_gax::query_parameter::QueryParameters;
/// let params = QueryParameters::new()
///     .set("includeGridData", true)
///     .append("ranges", "Sheet1!A1:B2")
///     .append("ranges", "Sheet2!A1:B2");
/// assert_eq!(
///     params.encode(),
///     "includeGridData=true&ranges=Sheet1%21A1%3AB2&ranges=Sheet2%21A1%3AB2"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParameters(Vec<(String, String)>);

impl QueryParameters {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, replacing any previous values.
    pub fn set<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: QueryParameter,
    {
        self.insert(name, value);
        self
    }

    /// Adds a value for `name`, keeping any previous values.
    pub fn append<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: QueryParameter,
    {
        let name = name.into();
        value.format(&name, &mut self.0);
        self
    }

    /// In-place version of [set][QueryParameters::set].
    pub fn insert<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: QueryParameter,
    {
        let name = name.into();
        self.remove(&name);
        value.format(&name, &mut self.0);
    }

    /// Removes all the values for `name`.
    pub fn remove(&mut self, name: &str) {
        self.0.retain(|(k, _)| k != name);
    }

    /// Adds all the parameters in `other`, replacing any values with the
    /// same names.
    pub fn extend(&mut self, other: QueryParameters) {
        for (k, _) in other.0.iter() {
            self.remove(k);
        }
        self.0.extend(other.0);
    }

    /// Returns the first value for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns all the values for `name`.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Returns true if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the parameters, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Formats the parameters as an `application/x-www-form-urlencoded` string.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter())
            .finish()
    }

    /// Parses an `application/x-www-form-urlencoded` string.
    pub fn decode(query: &str) -> Self {
        Self(
            url::form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        )
    }

    /// Adds the parameters to a request builder.
    pub fn apply(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.0.is_empty() {
            return builder;
        }
        builder.query(&self.0)
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParameters
where
    K: Into<String>,
    V: QueryParameter,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |params, (k, v)| params.append(k, v))
    }
}

/// Types that can be used as query parameter values.
///
/// - Simple scalars are formatted as usual.
/// - [Option] values that do not contain a value are not included.
/// - [Vec] values are formatted as repeated parameters.
pub trait QueryParameter {
    fn format(&self, name: &str, output: &mut Vec<(String, String)>);
}

impl<T: QueryParameter> QueryParameter for Option<T> {
    fn format(&self, name: &str, output: &mut Vec<(String, String)>) {
        if let Some(v) = self {
            v.format(name, output);
        }
    }
}

impl<T: QueryParameter> QueryParameter for Vec<T> {
    fn format(&self, name: &str, output: &mut Vec<(String, String)>) {
        self.iter().for_each(|v| v.format(name, output));
    }
}

impl<T: QueryParameter + ?Sized> QueryParameter for &T {
    fn format(&self, name: &str, output: &mut Vec<(String, String)>) {
        (*self).format(name, output);
    }
}

macro_rules! scalar_parameter {
    ($($t:ty),*) => {
        $(
        impl QueryParameter for $t {
            fn format(&self, name: &str, output: &mut Vec<(String, String)>) {
                output.push((name.to_string(), self.to_string()));
            }
        }
        )*
    };
}

scalar_parameter!(str, String, bool, i32, i64, u32, u64, f32, f64);
