//! `sitemap` command.

use super::args::SitemapArgs;
use anyhow::Result;
use std::io::{Write, stdout};
use udaan_seo::{
    config::cfg,
    generator::{minify_xml, sitemap::Sitemap},
};

pub fn run_sitemap(args: &SitemapArgs) -> Result<()> {
    let config = cfg();
    let sitemap = Sitemap::build(&config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(sitemap.entries())?);
        return Ok(());
    }

    if args.stdout {
        let xml = sitemap.into_xml();
        let mut out = stdout().lock();
        out.write_all(&minify_xml(xml.as_bytes(), args.minify))?;
        out.flush()?;
        return Ok(());
    }

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| config.sitemap_path());
    sitemap.write(&path, args.minify)
}
