//! Converter - the class-to-interface pipeline
//!
//! Parse → build symbols → classify and render each member → assemble.
//! Each request is independent; a failure at any stage aborts that request
//! without partial output.

use crate::classifier::TypeClassifier;
use crate::config::ConverterConfig;
use crate::error::ConvertResult;
use crate::members::{render_method, render_property};
use crate::render::render_interface;
use crate::source::SourceFile;
use crate::symbols::build_defined_types;
use rayon::prelude::*;
use tracing::debug;

/// Converts classes to interfaces using one configuration
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConverterConfig,
    classifier: TypeClassifier,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConverterConfig::default())
    }
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        let classifier = TypeClassifier::from_config(&config);
        Self { config, classifier }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Parse source text with the configured dialect
    pub fn parse(&self, text: &str) -> ConvertResult<SourceFile> {
        SourceFile::parse(text, self.config.dialect)
    }

    /// Names of every class declared in `text`, in source order
    pub fn list_class_names(&self, text: &str) -> ConvertResult<Vec<String>> {
        Ok(self.parse(text)?.class_names())
    }

    /// Convert the class named `class_name` in `text` into interface text
    pub fn convert(&self, text: &str, class_name: &str) -> ConvertResult<String> {
        let source = self.parse(text)?;
        self.convert_source(&source, class_name)
    }

    /// Convert one class of an already parsed file
    pub fn convert_source(&self, source: &SourceFile, class_name: &str) -> ConvertResult<String> {
        let class = source.class(class_name)?;
        let table = build_defined_types(source.declarations(), &class.generics)?;

        let property_lines: Vec<String> = class.properties.iter().map(render_property).collect();

        let mut surfaced = 0;
        let method_lines: Vec<String> = class
            .methods
            .iter()
            .map(|method| {
                let rendered = render_method(method, &self.classifier, &table);
                surfaced += rendered.free_generics.len();
                rendered.text
            })
            .collect();

        debug!(
            "Converted class {}: {} properties, {} methods, {} surfaced generics",
            class.name,
            property_lines.len(),
            method_lines.len(),
            surfaced
        );

        Ok(render_interface(
            &class.name,
            &class.generics,
            &property_lines,
            &method_lines,
            &self.config.indent,
        ))
    }

    /// Convert many `(text, class_name)` requests in parallel
    ///
    /// Results are in input order; one failing request does not affect the others.
    pub fn convert_batch(&self, requests: &[(String, String)]) -> Vec<ConvertResult<String>> {
        debug!("Converting batch of {} requests", requests.len());
        requests
            .par_iter()
            .map(|(text, class_name)| self.convert(text, class_name))
            .collect()
    }
}

/// Convert with the default configuration
pub fn convert(text: &str, class_name: &str) -> ConvertResult<String> {
    Converter::default().convert(text, class_name)
}

/// List class names with the default configuration
pub fn list_class_names(text: &str) -> ConvertResult<Vec<String>> {
    Converter::default().list_class_names(text)
}
