/// A jar in a Maven repository, enough to build its download URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MavenArtifact {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub classifier: Option<String>,
}

impl MavenArtifact {
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> Self {
        Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
            classifier: None,
        }
    }

    pub fn with_classifier(mut self, classifier: &str) -> Self {
        self.classifier = Some(classifier.to_string());
        self
    }

    /// `artifactId-version[-classifier].jar`
    pub fn filename(&self) -> String {
        match &self.classifier {
            Some(c) => format!("{}-{}-{}.jar", self.artifact_id, self.version, c),
            None => format!("{}-{}.jar", self.artifact_id, self.version),
        }
    }

    /// `<repo>/<group/path>/<artifactId>/<version>/<filename>`
    pub fn url(&self, repo_base: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            repo_base.trim_end_matches('/'),
            self.group_id.replace('.', "/"),
            self.artifact_id,
            self.version,
            self.filename()
        )
    }

    /// Location of the artifact's `maven-metadata.xml` (version independent).
    pub fn metadata_url(group_id: &str, artifact_id: &str, repo_base: &str) -> String {
        format!(
            "{}/{}/{}/maven-metadata.xml",
            repo_base.trim_end_matches('/'),
            group_id.replace('.', "/"),
            artifact_id
        )
    }
}
