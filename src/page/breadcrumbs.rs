//! Breadcrumb trail from a route path.

use crate::seo::Breadcrumb;
use regex::Regex;
use std::sync::LazyLock;

/// Segments whose display name is fixed rather than derived.
const SEGMENT_NAMES: [(&str, &str); 2] = [
    ("career-tracks", "Career Tracks"),
    ("enroll-now", "Enroll Now"),
];

/// Build the trail for `pathname`, always starting at Home.
///
/// `/courses/data-science-advanced` yields Home (`/`), Courses (`/courses`)
/// and Data Science Advanced (`/courses/data-science-advanced`).
pub fn breadcrumbs_from_path(pathname: &str) -> Vec<Breadcrumb> {
    let mut breadcrumbs = vec![Breadcrumb::new("Home", "/")];
    let mut current_path = String::new();

    for segment in pathname.split('/').filter(|s| !s.is_empty()) {
        current_path.push('/');
        current_path.push_str(segment);
        breadcrumbs.push(Breadcrumb::new(segment_name(segment), current_path.as_str()));
    }

    breadcrumbs
}

/// Display name for one path segment.
fn segment_name(segment: &str) -> String {
    if let Some((_, name)) = SEGMENT_NAMES.iter().find(|(s, _)| *s == segment) {
        return (*name).to_owned();
    }
    title_case(&segment.replace('-', " "))
}

/// Upper-case the first ASCII letter of every word.
fn title_case(text: &str) -> String {
    static RE_WORD_START: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?-u:\b)[a-z]").unwrap());

    RE_WORD_START
        .replace_all(text, |caps: &regex::Captures| caps[0].to_ascii_uppercase())
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crumbs(pathname: &str) -> Vec<(String, String)> {
        breadcrumbs_from_path(pathname)
            .into_iter()
            .map(|b| (b.name, b.url))
            .collect()
    }

    fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected
            .iter()
            .map(|(n, u)| ((*n).to_owned(), (*u).to_owned()))
            .collect()
    }

    #[test]
    fn course_path() {
        assert_eq!(
            crumbs("/courses/data-science-advanced"),
            pairs(&[
                ("Home", "/"),
                ("Courses", "/courses"),
                ("Data Science Advanced", "/courses/data-science-advanced"),
            ])
        );
    }

    #[test]
    fn override_segments() {
        assert_eq!(
            crumbs("/career-tracks"),
            pairs(&[("Home", "/"), ("Career Tracks", "/career-tracks")])
        );
        assert_eq!(
            crumbs("/enroll-now"),
            pairs(&[("Home", "/"), ("Enroll Now", "/enroll-now")])
        );
    }

    #[test]
    fn root_is_home_only() {
        assert_eq!(crumbs("/"), pairs(&[("Home", "/")]));
        assert_eq!(crumbs(""), pairs(&[("Home", "/")]));
    }

    #[test]
    fn empty_segments_are_dropped() {
        assert_eq!(
            crumbs("//blog///ai-trends/"),
            pairs(&[("Home", "/"), ("Blog", "/blog"), ("Ai Trends", "/blog/ai-trends")])
        );
    }

    #[test]
    fn relative_path_still_rooted() {
        assert_eq!(
            crumbs("mentorship"),
            pairs(&[("Home", "/"), ("Mentorship", "/mentorship")])
        );
    }

    mod title_case {
        use super::*;

        #[test]
        fn words_and_digits() {
            assert_eq!(title_case("1st year plan"), "1st Year Plan");
        }

        #[test]
        fn underscores_join_words() {
            // `_` is a word character, so no boundary inside `foo_bar`
            assert_eq!(title_case("foo_bar baz"), "Foo_bar Baz");
        }

        #[test]
        fn punctuation_starts_words() {
            assert_eq!(title_case("node.js and c++"), "Node.Js And C++");
        }

        #[test]
        fn keeps_existing_capitals() {
            assert_eq!(title_case("AWS devops"), "AWS Devops");
        }
    }
}
