mod format;

pub use self::format::RenderFormat;
use crate::{config::Config, element::Element, error::Error, mount::mount};
use log::debug;
use std::io::Write;

/// Renders an element tree into a writer.
pub fn render_element(
    config: &Config,
    element: &Element,
    format: RenderFormat,
    writer: &mut impl Write,
) -> Result<(), Error> {
    match format {
        RenderFormat::Html => {
            let document = config.load_document()?;

            mount(&document, config.container(), element)?;
            debug!("mounted <{}> into #{}", element.tag(), config.container());

            writeln!(writer, "{}", document.to_html()?)?;
        }
        RenderFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, element)?;
            writeln!(writer)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::{heading, parent};
    use pretty_assertions::assert_eq;

    fn render(config: &Config, element: &Element, format: RenderFormat) -> Result<String, Error> {
        let mut bytes = vec![];
        render_element(config, element, format, &mut bytes)?;
        Ok(String::from_utf8(bytes).unwrap())
    }

    #[test]
    fn render_parent_as_html() {
        assert_eq!(
            render(&Config::default(), &parent(), RenderFormat::Html).unwrap(),
            concat!(
                r#"<!DOCTYPE html><html><head></head><body><div id="root">"#,
                r#"<div id="parent"><div id="child"><h1>I am h1</h1><h2>I am h2</h2></div></div>"#,
                "</div></body></html>\n"
            )
        );
    }

    #[test]
    fn render_heading_as_json() {
        let output = render(&Config::default(), &heading(), RenderFormat::Json).unwrap();

        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&output).unwrap(),
            serde_json::json!({
                "type": "h2",
                "props": {
                    "id": "heading",
                    "xyz": "abc",
                    "children": "Hello world from react in app",
                },
            })
        );
    }

    #[test]
    fn fail_with_missing_container() {
        assert!(matches!(
            render(
                &Config::default().set_container("missing"),
                &parent(),
                RenderFormat::Html
            ),
            Err(Error::Mount(_))
        ));
    }
}
