//! Entity extractors: Doxygen compounds and members → [`ApiDetails`].
//!
//! Every extractor goes through [`ApiTable::get_or_create`], so a symbol seen
//! in several files (a struct and its typedef, say) accumulates into one
//! record. Blank text never overwrites what an earlier pass recorded.

use crate::doxygen::text::{combine, description};
use crate::doxygen::Element;
use crate::model::{ApiDetails, ApiTable};
use crate::names::NameResolver;
use tracing::debug;

/// `kind` attribute of a `compounddef`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompoundKind {
    Struct,
    Union,
    File,
    Namespace,
    Other,
}

impl CompoundKind {
    pub fn of(kind: Option<&str>) -> Self {
        match kind {
            Some("struct") => Self::Struct,
            Some("union") => Self::Union,
            Some("file") => Self::File,
            Some("namespace") => Self::Namespace,
            _ => Self::Other,
        }
    }
}

/// `kind` attribute of a `memberdef`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Function,
    Enum,
    Typedef,
    Variable,
    Other,
}

impl MemberKind {
    pub fn of(kind: Option<&str>) -> Self {
        match kind {
            Some("function") => Self::Function,
            Some("enum") => Self::Enum,
            Some("typedef") => Self::Typedef,
            Some("variable") => Self::Variable,
            _ => Self::Other,
        }
    }
}

/// Walks parsed documents and merges what it finds into an [`ApiTable`].
#[derive(Debug, Clone)]
pub struct Extractor<'a> {
    names: NameResolver<'a>,
    help_link: &'a str,
}

impl<'a> Extractor<'a> {
    pub fn new(names: NameResolver<'a>, help_link: &'a str) -> Self {
        Self { names, help_link }
    }

    /// Extract every compound in `root`. Returns the number of entities
    /// merged into `table`.
    pub fn extract_document(&self, root: &Element, table: &mut ApiTable) -> usize {
        let mut count = 0;
        for compound in root.descendants_named("compounddef") {
            count += self.extract_compound(compound, table);
        }
        count
    }

    fn extract_compound(&self, compound: &Element, table: &mut ApiTable) -> usize {
        let name = compound.child_text("compoundname").unwrap_or_default();
        if name.is_empty() {
            return 0;
        }

        match CompoundKind::of(compound.attr("kind")) {
            CompoundKind::Struct | CompoundKind::Union => {
                self.extract_record(compound, &name, table);
                1
            }
            CompoundKind::File | CompoundKind::Namespace => {
                let mut count = 0;
                for member in compound.descendants_named("memberdef") {
                    if self.extract_member(member, table) {
                        count += 1;
                    }
                }
                count
            }
            CompoundKind::Other => 0,
        }
    }

    /// Struct or union: description plus one entry per `variable` member.
    fn extract_record(&self, compound: &Element, name: &str, table: &mut ApiTable) {
        let key = self.names.type_name(name);
        debug!("struct {} -> {}", name, key);

        let details = table.get_or_create(&key);
        apply_descriptions(details, compound);

        for member in compound.descendants_named("memberdef") {
            if MemberKind::of(member.attr("kind")) != MemberKind::Variable {
                continue;
            }
            let field = member.child_text("name").unwrap_or_default();
            if field.is_empty() {
                continue;
            }
            details.set_field(&field, combined_description(member));
        }

        details.help_link = Some(self.help_link.to_string());
    }

    /// Dispatch a member of a file or namespace. Returns whether it was
    /// recorded.
    fn extract_member(&self, member: &Element, table: &mut ApiTable) -> bool {
        let name = member.child_text("name").unwrap_or_default();
        if name.is_empty() {
            return false;
        }

        match MemberKind::of(member.attr("kind")) {
            MemberKind::Function => self.extract_function(member, &name, table),
            MemberKind::Enum => self.extract_enum(member, &name, table),
            MemberKind::Typedef => self.extract_typedef(member, &name, table),
            MemberKind::Variable | MemberKind::Other => return false,
        }
        true
    }

    fn extract_function(&self, member: &Element, name: &str, table: &mut ApiTable) {
        let key = self.names.function_name(name);
        debug!("function {} -> {}", name, key);

        let details = table.get_or_create(&key);
        apply_descriptions(details, member);

        if let Some(detailed) = member.child("detaileddescription") {
            let params = detailed
                .descendants_named("parameterlist")
                .find(|list| list.attr("kind") == Some("param"));
            if let Some(params) = params {
                for item in params.elements_named("parameteritem") {
                    let param = item
                        .child("parameternamelist")
                        .and_then(|names| names.child_text("parametername"))
                        .unwrap_or_default();
                    let text = description(item.child("parameterdescription"));
                    details.set_parameter(&param, text);
                }
            }

            let returns = detailed
                .descendants_named("simplesect")
                .find(|sect| sect.attr("kind") == Some("return"));
            if let Some(returns) = returns {
                details.set_return_value(description(Some(returns)));
            }
        }

        details.help_link = Some(self.help_link.to_string());
    }

    /// Enum: values become fields, keyed by their remapped names.
    fn extract_enum(&self, member: &Element, name: &str, table: &mut ApiTable) {
        let key = self.names.type_name(name);
        debug!("enum {} -> {}", name, key);

        let details = table.get_or_create(&key);
        apply_descriptions(details, member);

        for value in member.elements_named("enumvalue") {
            let value_name = value.child_text("name").unwrap_or_default();
            if value_name.is_empty() {
                continue;
            }
            let resolved = self.names.enum_member_name(&value_name);
            details.set_field(&resolved, combined_description(value));
        }

        details.help_link = Some(self.help_link.to_string());
    }

    fn extract_typedef(&self, member: &Element, name: &str, table: &mut ApiTable) {
        let key = self.names.type_name(name);
        debug!("typedef {} -> {}", name, key);

        let details = table.get_or_create(&key);
        apply_descriptions(details, member);
        details.help_link = Some(self.help_link.to_string());
    }
}

/// Brief → Description, detailed → Remarks, skipping blank text.
fn apply_descriptions(details: &mut ApiDetails, element: &Element) {
    details.set_description(description(element.child("briefdescription")));
    details.set_remarks(description(element.child("detaileddescription")));
}

fn combined_description(element: &Element) -> String {
    combine(
        &description(element.child("briefdescription")),
        &description(element.child("detaileddescription")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doxygen::parse;
    use crate::names::DEFAULT_STRIP_PREFIX;
    use crate::remap::RemapTable;

    const HELP: &str = "https://example.com/docs/";

    fn extract(remap: &RemapTable, xml: &str, table: &mut ApiTable) -> usize {
        let extractor = Extractor::new(NameResolver::new(remap, DEFAULT_STRIP_PREFIX), HELP);
        extractor.extract_document(&parse(xml).unwrap(), table)
    }

    const STRUCT_XML: &str = r#"<doxygen>
  <compounddef id="structaiScene" kind="struct">
    <compoundname>aiScene</compoundname>
    <sectiondef kind="public-attrib">
      <memberdef kind="variable" id="a">
        <name>mNumMeshes</name>
        <briefdescription><para>The number of meshes.</para></briefdescription>
        <detaileddescription><para>The number of meshes. Never negative.</para></detaileddescription>
      </memberdef>
      <memberdef kind="variable" id="b">
        <name>mPrivate</name>
        <briefdescription></briefdescription>
        <detaileddescription></detaileddescription>
      </memberdef>
      <memberdef kind="function" id="c">
        <name>HasMeshes</name>
        <briefdescription><para>Check for meshes.</para></briefdescription>
      </memberdef>
    </sectiondef>
    <briefdescription><para>The root structure of imported data.</para></briefdescription>
    <detaileddescription><para>Everything imported is reachable from here.</para></detaileddescription>
  </compounddef>
</doxygen>"#;

    const FILE_XML: &str = r#"<doxygen>
  <compounddef id="cimport_8h" kind="file">
    <compoundname>cimport.h</compoundname>
    <sectiondef kind="func">
      <memberdef kind="function" id="f">
        <name>aiImportFile</name>
        <briefdescription><para>Reads the given file and returns its content.</para></briefdescription>
        <detaileddescription>
          <para>If the call succeeds, the imported data is returned.
            <parameterlist kind="retval"><parameteritem><parameternamelist>
              <parametername>NULL</parametername></parameternamelist>
              <parameterdescription><para>on failure</para></parameterdescription>
            </parameteritem></parameterlist>
            <parameterlist kind="param">
              <parameteritem>
                <parameternamelist><parametername>pFile</parametername></parameternamelist>
                <parameterdescription><para>Path and filename to the file to be imported.</para></parameterdescription>
              </parameteritem>
              <parameteritem>
                <parameternamelist><parametername>pFlags</parametername></parameternamelist>
                <parameterdescription><para>Optional post processing steps.</para></parameterdescription>
              </parameteritem>
              <parameteritem>
                <parameternamelist><parametername>pUnused</parametername></parameternamelist>
                <parameterdescription></parameterdescription>
              </parameteritem>
            </parameterlist>
            <simplesect kind="return"><para>Pointer to the imported data or NULL.</para></simplesect>
          </para>
        </detaileddescription>
      </memberdef>
    </sectiondef>
    <sectiondef kind="enum">
      <memberdef kind="enum" id="e">
        <name>aiReturn</name>
        <enumvalue id="e1"><name>aiReturn_SUCCESS</name>
          <briefdescription><para>Indicates that a function was successful.</para></briefdescription>
          <detaileddescription></detaileddescription>
        </enumvalue>
        <enumvalue id="e2"><name>aiReturn_FAILURE</name>
          <briefdescription><para>Indicates that a function failed.</para></briefdescription>
          <detaileddescription><para>Check the error string.</para></detaileddescription>
        </enumvalue>
        <briefdescription><para>Standard return type for some library functions.</para></briefdescription>
        <detaileddescription></detaileddescription>
      </memberdef>
      <memberdef kind="typedef" id="t">
        <name>aiLogStreamCallback</name>
        <briefdescription><para>Callback for log streams.</para></briefdescription>
        <detaileddescription></detaileddescription>
      </memberdef>
      <memberdef kind="define" id="d">
        <name>AI_MAX_NUMBER</name>
        <briefdescription><para>Ignored.</para></briefdescription>
      </memberdef>
    </sectiondef>
    <briefdescription></briefdescription>
    <detaileddescription></detaileddescription>
  </compounddef>
</doxygen>"#;

    #[test]
    fn struct_fields_and_descriptions() {
        let mut table = ApiTable::new();
        let count = extract(&RemapTable::new(), STRUCT_XML, &mut table);
        assert_eq!(count, 1);

        let scene = table.get("Scene").unwrap();
        assert_eq!(
            scene.description.as_deref(),
            Some("The root structure of imported data.")
        );
        assert_eq!(
            scene.remarks.as_deref(),
            Some("Everything imported is reachable from here.")
        );
        assert_eq!(scene.fields.len(), 1);
        assert_eq!(
            scene.fields["mNumMeshes"],
            "The number of meshes. Never negative."
        );
        assert_eq!(scene.help_link.as_deref(), Some(HELP));
        // Struct member functions are not top-level entities
        assert!(table.get("HasMeshes").is_none());
    }

    #[test]
    fn function_parameters_and_return() {
        let mut table = ApiTable::new();
        extract(&RemapTable::new(), FILE_XML, &mut table);

        let func = table.get("aiImportFile").unwrap();
        assert_eq!(
            func.description.as_deref(),
            Some("Reads the given file and returns its content.")
        );
        assert_eq!(
            func.remarks.as_deref(),
            Some("If the call succeeds, the imported data is returned.")
        );
        assert_eq!(func.parameters.len(), 2);
        assert_eq!(
            func.parameters["pFile"],
            "Path and filename to the file to be imported."
        );
        assert_eq!(func.parameters["pFlags"], "Optional post processing steps.");
        assert_eq!(
            func.return_value.as_deref(),
            Some("Pointer to the imported data or NULL.")
        );
        assert_eq!(func.help_link.as_deref(), Some(HELP));
    }

    #[test]
    fn enum_values_use_remapped_names() {
        let mut remap = RemapTable::new();
        remap.insert("aiReturn", "Result");
        remap.insert("aiReturn_SUCCESS", "Success");

        let mut table = ApiTable::new();
        extract(&remap, FILE_XML, &mut table);

        let result = table.get("Result").unwrap();
        assert_eq!(
            result.description.as_deref(),
            Some("Standard return type for some library functions.")
        );
        assert_eq!(result.remarks, None);
        assert_eq!(
            result.fields["Success"],
            "Indicates that a function was successful."
        );
        assert_eq!(
            result.fields["aiReturn_FAILURE"],
            "Indicates that a function failed. Check the error string."
        );
        assert!(table.get("Return").is_none());
    }

    #[test]
    fn typedef_gets_description_only() {
        let mut table = ApiTable::new();
        extract(&RemapTable::new(), FILE_XML, &mut table);

        let callback = table.get("LogStreamCallback").unwrap();
        assert_eq!(
            callback.description.as_deref(),
            Some("Callback for log streams.")
        );
        assert!(callback.fields.is_empty());
        assert!(callback.parameters.is_empty());
    }

    #[test]
    fn file_compound_counts_dispatched_members() {
        let mut table = ApiTable::new();
        let count = extract(&RemapTable::new(), FILE_XML, &mut table);
        // function, enum, typedef; the define is ignored
        assert_eq!(count, 3);
        assert_eq!(table.len(), 3);
        assert!(table.get("AI_MAX_NUMBER").is_none());
    }

    #[test]
    fn later_pass_merges_without_blanking() {
        let mut remap = RemapTable::new();
        remap.insert("aiScene", "Scene");
        let mut table = ApiTable::new();
        extract(&remap, STRUCT_XML, &mut table);

        // A typedef with the same resolved name but no detailed text
        let typedef_xml = r#"<doxygen><compounddef kind="file"><compoundname>scene.h</compoundname>
            <memberdef kind="typedef"><name>aiScene</name>
              <briefdescription><para>Scene alias.</para></briefdescription>
              <detaileddescription></detaileddescription>
            </memberdef></compounddef></doxygen>"#;
        extract(&remap, typedef_xml, &mut table);

        assert_eq!(table.len(), 1);
        let scene = table.get("Scene").unwrap();
        assert_eq!(scene.description.as_deref(), Some("Scene alias."));
        assert_eq!(
            scene.remarks.as_deref(),
            Some("Everything imported is reachable from here.")
        );
        assert_eq!(scene.fields.len(), 1);
    }

    #[test]
    fn unnamed_compound_is_skipped() {
        let mut table = ApiTable::new();
        let xml = r#"<doxygen><compounddef kind="struct"><compoundname></compoundname>
            <briefdescription><para>Lost.</para></briefdescription></compounddef></doxygen>"#;
        assert_eq!(extract(&RemapTable::new(), xml, &mut table), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn namespace_and_union_compounds() {
        let xml = r#"<doxygen>
  <compounddef kind="namespace"><compoundname>Assimp</compoundname>
    <sectiondef kind="func">
      <memberdef kind="function"><name>aiGetVersionMajor</name>
        <briefdescription><para>Major version.</para></briefdescription>
      </memberdef>
      <memberdef kind="enum"><name>aiOrigin</name>
        <enumvalue><name>aiOrigin_SET</name>
          <briefdescription><para>From the start.</para></briefdescription>
        </enumvalue>
        <briefdescription><para>Seek origins.</para></briefdescription>
      </memberdef>
      <memberdef kind="typedef"><name>aiInt</name>
        <briefdescription><para>Integer alias.</para></briefdescription>
      </memberdef>
    </sectiondef>
  </compounddef>
  <compounddef kind="union"><compoundname>aiValue</compoundname>
    <sectiondef kind="public-attrib">
      <memberdef kind="variable"><name>mInt</name>
        <briefdescription><para>Integer view.</para></briefdescription>
      </memberdef>
      <memberdef kind="variable"><name>mFloat</name>
        <detaileddescription><para>Float view.</para></detaileddescription>
      </memberdef>
    </sectiondef>
    <briefdescription><para>A tagged value.</para></briefdescription>
  </compounddef>
</doxygen>"#;
        let mut table = ApiTable::new();
        // three namespace members plus the union
        assert_eq!(extract(&RemapTable::new(), xml, &mut table), 4);

        let keys: Vec<_> = table.keys().cloned().collect();
        assert_eq!(keys, ["Int", "Origin", "Value", "aiGetVersionMajor"]);
        assert!(table.get("Assimp").is_none());

        assert_eq!(
            table.get("aiGetVersionMajor").unwrap().description.as_deref(),
            Some("Major version.")
        );
        assert_eq!(
            table.get("Origin").unwrap().fields["aiOrigin_SET"],
            "From the start."
        );

        let value = table.get("Value").unwrap();
        assert_eq!(value.description.as_deref(), Some("A tagged value."));
        assert_eq!(value.fields.len(), 2);
        assert_eq!(value.fields["mInt"], "Integer view.");
        assert_eq!(value.fields["mFloat"], "Float view.");
    }

    #[test]
    fn kinds_classify() {
        assert_eq!(CompoundKind::of(Some("union")), CompoundKind::Union);
        assert_eq!(CompoundKind::of(Some("class")), CompoundKind::Other);
        assert_eq!(CompoundKind::of(None), CompoundKind::Other);
        assert_eq!(MemberKind::of(Some("typedef")), MemberKind::Typedef);
        assert_eq!(MemberKind::of(Some("define")), MemberKind::Other);
    }
}
