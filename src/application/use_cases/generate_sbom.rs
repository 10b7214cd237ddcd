use crate::application::dto::{SbomRequest, SbomResponse};
use crate::ports::outbound::{DependencySnapshotReader, ProgressReporter};
use crate::sbom_generation::domain::{Component, SbomMetadata};
use crate::sbom_generation::services::{
    ComponentTreeBuilder, LicenseGapAuditor, LicenseTextAttacher,
};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// GenerateSbomUseCase - Core use case for SBOM generation
///
/// Orchestrates the generation workflow: resolve the npm dependency tree,
/// build the component tree, attach license text evidence, audit the tree
/// for license gaps, and produce metadata for the formatter. Infrastructure
/// is injected through generic outbound ports.
///
/// The gap audit is fatal by design: when any component lacks complete
/// license evidence the use case reports each offender through the progress
/// reporter and returns `SbomError::LicenseGapFailure`, so no document is
/// ever produced from an incomplete tree.
///
/// # Type Parameters
/// * `SR` - DependencySnapshotReader implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateSbomUseCase<SR, PR> {
    snapshot_reader: SR,
    progress_reporter: PR,
    tree_builder: ComponentTreeBuilder,
    attacher: LicenseTextAttacher,
    auditor: LicenseGapAuditor,
}

impl<SR, PR> GenerateSbomUseCase<SR, PR>
where
    SR: DependencySnapshotReader,
    PR: ProgressReporter,
{
    /// Creates a new GenerateSbomUseCase with injected dependencies
    pub fn new(snapshot_reader: SR, progress_reporter: PR) -> Self {
        Self {
            snapshot_reader,
            progress_reporter,
            tree_builder: ComponentTreeBuilder::new(),
            attacher: LicenseTextAttacher::new(),
            auditor: LicenseGapAuditor::new(),
        }
    }

    /// Executes the SBOM generation use case
    ///
    /// # Arguments
    /// * `request` - SBOM generation request containing project path and options
    ///
    /// # Returns
    /// SbomResponse containing the annotated component tree and metadata
    pub fn execute(&self, request: SbomRequest) -> Result<SbomResponse> {
        self.progress_reporter.report(&format!(
            "📦 Resolving npm dependency tree: {}",
            request.project_path.display()
        ));
        let raw_snapshot = self.snapshot_reader.read_snapshot(&request.project_path)?;
        let parsed = self.tree_builder.parse(&raw_snapshot)?;
        let mut components = parsed.components;

        let total: usize = components.iter().map(Component::subtree_size).sum();
        self.progress_reporter
            .report(&format!("✅ Detected {} component(s)", total));

        let mut licenses_with_text = 0;
        if request.skip_license_texts {
            self.progress_reporter
                .report("⏭️  Skipping license text collection");
        } else {
            licenses_with_text = self.collect_license_texts(&mut components);
            self.audit_license_gaps(&components)?;
        }

        let metadata = SbomMetadata::generate(parsed.project_name, parsed.project_version);
        Ok(SbomResponse::new(components, metadata, licenses_with_text))
    }

    /// Walks the tree top-level by top-level so the progress bar tracks
    /// direct dependencies while the attacher recurses below each one.
    fn collect_license_texts(&self, components: &mut [Component]) -> usize {
        self.progress_reporter
            .report("🔍 Collecting license texts from node_modules...");

        let total = components.len();
        let mut attached = 0;
        for (idx, component) in components.iter_mut().enumerate() {
            let name = component.name.clone();
            self.progress_reporter
                .report_progress(idx + 1, total, Some(&name));
            attached += self.attacher.attach_tree(std::slice::from_mut(component));
        }

        self.progress_reporter.report_completion(&format!(
            "📄 License text attached to {} license(s)",
            attached
        ));
        attached
    }

    /// Renders the gap report and fails the run when the audit finds
    /// incomplete components.
    fn audit_license_gaps(&self, components: &[Component]) -> Result<()> {
        let gaps = self.auditor.audit(components);
        if gaps.is_empty() {
            return Ok(());
        }

        self.progress_reporter.report_error(&format!(
            "Components without license information ({})",
            gaps.len()
        ));
        for gap in &gaps {
            self.progress_reporter
                .report_error(&format!(" - {}", gap.coordinate()));
        }

        Err(SbomError::LicenseGapFailure { count: gaps.len() }.into())
    }
}
