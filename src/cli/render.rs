//! `head`, `schema` and `breadcrumbs` commands.

use super::args::PageArgs;
use anyhow::Result;
use udaan_seo::{
    config::{SiteConfig, cfg},
    debug,
    page::{breadcrumbs_from_path, for_path},
    seo::{MetaFields, Metadata, MetadataBuilder},
};

/// Print the head fragment for a route.
pub fn run_head(args: &PageArgs) -> Result<()> {
    print!("{}", render(args, &cfg()).render_head());
    Ok(())
}

/// Print the JSON-LD documents for a route.
pub fn run_schema(args: &PageArgs, compact: bool) -> Result<()> {
    let json = render(args, &cfg()).json_ld();
    let out = if compact {
        serde_json::to_string(&json)?
    } else {
        serde_json::to_string_pretty(&json)?
    };
    println!("{out}");
    Ok(())
}

/// Print the breadcrumb trail for a route.
pub fn run_breadcrumbs(path: &str) -> Result<()> {
    let crumbs = breadcrumbs_from_path(path);
    println!("{}", serde_json::to_string_pretty(&crumbs)?);
    Ok(())
}

fn render(args: &PageArgs, config: &SiteConfig) -> Metadata {
    let path = route_path(&args.path);
    let fields = fields_for(args, &path);
    MetadataBuilder::new(config).build(&fields, &path)
}

/// Route path with exactly one leading slash.
fn route_path(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

/// Registered page defaults overlaid with command-line values.
fn fields_for(args: &PageArgs, path: &str) -> MetaFields {
    let mut fields = match for_path(path) {
        Some(page) => {
            debug!("page"; "using defaults for `{}`", page.key);
            page.to_fields()
        }
        None => {
            debug!("page"; "no registered page for {}, using site defaults", path);
            MetaFields::default()
        }
    };

    overlay(&mut fields.title, &args.title);
    overlay(&mut fields.description, &args.description);
    overlay(&mut fields.keywords, &args.keywords);
    overlay(&mut fields.image, &args.image);
    overlay(&mut fields.page_type, &args.page_type);
    overlay(&mut fields.author, &args.author);
    overlay(&mut fields.published_time, &args.published);
    overlay(&mut fields.modified_time, &args.modified);
    fields.is_article = args.article;

    // The home page alone has a one-crumb trail; skip it
    let crumbs = breadcrumbs_from_path(path);
    if !args.no_breadcrumbs && crumbs.len() > 1 {
        fields.breadcrumbs = crumbs;
    }

    fields
}

fn overlay(target: &mut Option<String>, value: &Option<String>) {
    if let Some(value) = value {
        *target = Some(value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(path: &str) -> PageArgs {
        PageArgs {
            path: path.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn route_path_normalizes_leading_slash() {
        assert_eq!(route_path("courses"), "/courses");
        assert_eq!(route_path("//courses"), "/courses");
        assert_eq!(route_path("/"), "/");
        assert_eq!(route_path(""), "/");
    }

    #[test]
    fn course_route_gets_course_and_breadcrumbs() {
        let fields = fields_for(
            &args("/courses/data-science-advanced"),
            "/courses/data-science-advanced",
        );
        assert!(fields.course.is_some());
        assert_eq!(fields.breadcrumbs.len(), 3);
        assert_eq!(
            fields.title.as_deref(),
            Some("Advanced Data Science & AI Course - 12 Weeks Job-Ready Program")
        );
    }

    #[test]
    fn home_has_no_breadcrumbs() {
        let fields = fields_for(&args("/"), "/");
        assert!(fields.breadcrumbs.is_empty());
        assert_eq!(fields.title.as_deref(), Some("Launch Your Tech Career in 6 Months"));
    }

    #[test]
    fn flags_override_defaults() {
        let page = PageArgs {
            title: Some("Custom".into()),
            article: true,
            no_breadcrumbs: true,
            ..args("/blog")
        };
        let fields = fields_for(&page, "/blog");
        assert_eq!(fields.title.as_deref(), Some("Custom"));
        assert!(fields.is_article);
        assert!(fields.breadcrumbs.is_empty());
        // Untouched defaults survive
        assert!(fields.description.unwrap().starts_with("Stay updated"));
    }

    #[test]
    fn unknown_route_uses_site_defaults() {
        let metadata = render(&args("/blog/some-post"), &SiteConfig::default());
        assert_eq!(
            metadata.tags.title_text(),
            Some("Udaan Tech Academy - Launch Your Tech Career in 6 Months")
        );
        // Organization + breadcrumbs
        assert_eq!(metadata.schemas.len(), 2);
    }
}
