use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch implementation-guide repository with `input/` and `terminology/`.
pub struct TestRepo {
    pub dir: TempDir,
}

#[allow(dead_code)]
impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_json(&self, relative: &str, value: &Value) -> PathBuf {
        self.write_raw(relative, &serde_json::to_string_pretty(value).unwrap())
    }

    pub fn write_raw(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    pub fn page(&self, subdir: &str, id: &str) -> PathBuf {
        self.root().join("docs").join(subdir).join(format!("{id}.md"))
    }

    pub fn read_page(&self, subdir: &str, id: &str) -> String {
        fs::read_to_string(self.page(subdir, id)).unwrap()
    }
}

#[allow(dead_code)]
pub fn create_test_profile(id: &str) -> Value {
    json!({
        "resourceType": "StructureDefinition",
        "id": id,
        "url": format!("https://fhir.zarishsphere.com/StructureDefinition/{id}"),
        "name": "ZarishPatient",
        "title": "Zarish Patient",
        "status": "active",
        "version": "0.1.0",
        "description": "Patient profile for the ZarishSphere platform.",
        "kind": "resource",
        "abstract": false,
        "type": "Patient",
        "baseDefinition": "http://hl7.org/fhir/StructureDefinition/Patient",
        "derivation": "constraint"
    })
}

#[allow(dead_code)]
pub fn create_test_code_system(id: &str, codes: &[&str]) -> Value {
    let concept: Vec<Value> = codes
        .iter()
        .map(|code| json!({"code": code, "display": code.to_uppercase()}))
        .collect();

    json!({
        "resourceType": "CodeSystem",
        "id": id,
        "url": format!("https://fhir.zarishsphere.com/CodeSystem/{id}"),
        "name": "ZarishBloodGroup",
        "status": "draft",
        "content": "complete",
        "concept": concept
    })
}

#[allow(dead_code)]
pub fn create_test_value_set(id: &str) -> Value {
    json!({
        "resourceType": "ValueSet",
        "id": id,
        "url": format!("https://fhir.zarishsphere.com/ValueSet/{id}"),
        "name": "ZarishBloodGroupVS",
        "title": "Zarish Blood Group",
        "compose": {
            "include": [{"system": "https://fhir.zarishsphere.com/CodeSystem/zarish-blood-group"}]
        }
    })
}
