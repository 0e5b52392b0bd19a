//! `<head>` fragment emission.
//!
//! Renders the site-wide head tags every page shares: title, description,
//! favicon, social card, metadata records and the optional analytics
//! snippets. Analytics tags appear only when the resolved manifest carries the
//! corresponding identifier.

use crate::{
    manifest::{Gtag, ResolvedManifest, TagManager},
    utils::xml::{
        XmlWriter, create_xml_writer, into_string, newline, write_empty_elem, write_inline_script,
        write_script, write_text_element,
    },
};
use anyhow::Result;

const GTAG_SRC: &str = "https://www.googletagmanager.com/gtag/js?id=";

/// Render the shared head tags, one per line.
pub fn render_head(manifest: &ResolvedManifest) -> Result<String> {
    let mut writer = create_xml_writer();
    let site = &manifest.site;

    if !site.title.is_empty() {
        write_text_element(&mut writer, "title", &site.title)?;
        newline(&mut writer)?;
    }
    if !site.tagline.is_empty() {
        line(&mut writer, "meta", &[("name", "description"), ("content", &site.tagline)])?;
    }

    if let Some(favicon) = &site.favicon {
        line(&mut writer, "link", &[("rel", "icon"), ("href", &site.asset_href(favicon))])?;
    }

    // Explicit metadata records take precedence over the derived card tags
    if let Some(card) = &site.social_card {
        for (attr, key) in [("property", "og:image"), ("name", "twitter:image")] {
            if !manifest.metadata.iter().any(|m| m.key() == key) {
                line(&mut writer, "meta", &[(attr, key), ("content", card)])?;
            }
        }
    }

    for record in &manifest.metadata {
        line(
            &mut writer,
            "meta",
            &[(record.attr(), record.key()), ("content", record.content())],
        )?;
    }

    if let Some(gtag) = &manifest.gtag {
        write_gtag(&mut writer, gtag)?;
    }
    if let Some(tag_manager) = &manifest.tag_manager {
        write_tag_manager(&mut writer, tag_manager)?;
    }

    into_string(writer)
}

fn line(writer: &mut XmlWriter, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    write_empty_elem(writer, tag, attrs)?;
    newline(writer)
}

fn write_gtag(writer: &mut XmlWriter, gtag: &Gtag) -> Result<()> {
    let src = format!("{GTAG_SRC}{}", urlencoding::encode(&gtag.tracking_id));
    write_script(writer, &src, true)?;
    newline(writer)?;

    let id = js_string(&gtag.tracking_id)?;
    let config = if gtag.anonymize_ip {
        format!("gtag('config', {id}, {{\"anonymize_ip\":true}});")
    } else {
        format!("gtag('config', {id});")
    };
    let body = format!(
        "window.dataLayer = window.dataLayer || [];\
         function gtag(){{dataLayer.push(arguments);}}\
         gtag('js', new Date());\
         {config}"
    );
    write_inline_script(writer, &body)?;
    newline(writer)
}

fn write_tag_manager(writer: &mut XmlWriter, tag_manager: &TagManager) -> Result<()> {
    let id = js_string(&tag_manager.container_id)?;
    let body = format!(
        "(function(w,d,s,l,i){{w[l]=w[l]||[];w[l].push({{'gtm.start':new Date().getTime(),event:'gtm.js'}});\
         var f=d.getElementsByTagName(s)[0],j=d.createElement(s),dl=l!='dataLayer'?'&l='+l:'';\
         j.async=true;j.src='https://www.googletagmanager.com/gtm.js?id='+i+dl;\
         f.parentNode.insertBefore(j,f);}})(window,document,'script','dataLayer',{id});"
    );
    write_inline_script(writer, &body)?;
    newline(writer)
}

/// Quote a value as a JavaScript string literal safe to inline in `<script>`.
fn js_string(value: &str) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}
