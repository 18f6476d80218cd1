//! Generate Protocol use case
//!
//! Orchestrates the full protocol flow: tally, sign, compose, package.

use crate::config::GenerationParams;
use crate::ports::package_writer::{PackageWriter, PackagingError};
use crate::ports::progress::{GenerationPhase, NoProgress, ProgressNotifier};
use crate::ports::qr_renderer::{QrRenderer, RenderError};
use base64::Engine as _;
use protocol_domain::document::FIRST_ITEM_NUMBER;
use protocol_domain::{
    CompanyProfile, ComposeContext, DocumentComposer, DocumentOptions, DomainError, ItemMinutes,
    Labels, MediaEntry, MeetingQuorum, ProtocolDocument, ProtocolInput, ProtocolPackage,
    QrOptions, RelationshipTable, TallyResult, VoteRecord, company_payload, compute_item_result,
    compute_meeting_quorum, voter_receipt_payload,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur during protocol generation
#[derive(Error, Debug)]
pub enum GenerateProtocolError {
    #[error("Company signature failed: {0}")]
    CompanySignature(RenderError),

    #[error("Packaging failed: {0}")]
    Packaging(#[from] PackagingError),

    #[error("Composed document is inconsistent: {0}")]
    Composition(DomainError),

    #[error("Generation cancelled")]
    Cancelled,
}

/// Input for the GenerateProtocol use case
#[derive(Debug, Clone)]
pub struct GenerateProtocolInput {
    /// Finalized meeting, agenda, and votes
    pub protocol: ProtocolInput,
    /// Operator that signs the protocol
    pub company: CompanyProfile,
    pub document: DocumentOptions,
    pub qr: QrOptions,
}

impl GenerateProtocolInput {
    pub fn new(protocol: ProtocolInput, company: CompanyProfile) -> Self {
        Self {
            protocol,
            company,
            document: DocumentOptions::default(),
            qr: QrOptions::default(),
        }
    }

    pub fn with_document_options(mut self, options: DocumentOptions) -> Self {
        self.document = options;
        self
    }

    pub fn with_qr_options(mut self, options: QrOptions) -> Self {
        self.qr = options;
        self
    }
}

/// Tally outcome of one numbered agenda item
#[derive(Debug, Clone, PartialEq)]
pub struct ItemOutcome {
    /// Number as printed in the minutes
    pub number: usize,
    pub title: String,
    pub result: TallyResult,
}

/// Result of a successful generation
#[derive(Debug, Clone)]
pub struct GenerateProtocolOutput {
    pub document: ProtocolDocument,
    pub quorum: MeetingQuorum,
    pub items: Vec<ItemOutcome>,
    /// Whether the company QR was embedded
    pub company_signed: bool,
    /// Voters whose QR receipt was embedded
    pub signed_voters: usize,
    /// Voters that got the fallback mark instead
    pub fallback_voters: usize,
}

/// Use case for generating a meeting protocol
pub struct GenerateProtocolUseCase<R: QrRenderer + 'static, W: PackageWriter> {
    renderer: Arc<R>,
    writer: Arc<W>,
    params: GenerationParams,
}

impl<R: QrRenderer + 'static, W: PackageWriter> GenerateProtocolUseCase<R, W> {
    pub fn new(renderer: Arc<R>, writer: Arc<W>) -> Self {
        Self {
            renderer,
            writer,
            params: GenerationParams::default(),
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: GenerateProtocolInput,
    ) -> Result<GenerateProtocolOutput, GenerateProtocolError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: GenerateProtocolInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<GenerateProtocolOutput, GenerateProtocolError> {
        self.execute_with_cancellation(input, progress, CancellationToken::new())
            .await
    }

    /// Execute the use case until it finishes or `cancel` fires.
    ///
    /// On cancellation in-flight renders are aborted and nothing reaches
    /// the package writer.
    pub async fn execute_with_cancellation(
        &self,
        input: GenerateProtocolInput,
        progress: &dyn ProgressNotifier,
        cancel: CancellationToken,
    ) -> Result<GenerateProtocolOutput, GenerateProtocolError> {
        if cancel.is_cancelled() {
            return Err(GenerateProtocolError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                info!("Protocol generation cancelled");
                Err(GenerateProtocolError::Cancelled)
            }
            result = self.generate(input, progress) => result,
        }
    }

    async fn generate(
        &self,
        input: GenerateProtocolInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<GenerateProtocolOutput, GenerateProtocolError> {
        let GenerateProtocolInput {
            protocol,
            company,
            document: options,
            qr,
        } = input;
        let meeting = &protocol.meeting;
        let labels = options.locale.labels();

        info!(
            "Generating protocol № {} ({} items, {} votes, locale {})",
            meeting.number,
            protocol.agenda_items.len(),
            protocol.votes.len(),
            options.locale
        );

        // Phase 1: Tally
        let quorum = compute_meeting_quorum(meeting);
        let minutes = Self::phase_tally(&protocol, &options, progress);

        // Phase 2: Company signature
        let logo = self
            .phase_company_signature(&company, labels, &qr, progress)
            .await?;

        // Phase 3: Voter signatures
        let signatures = self
            .phase_voter_signatures(&meeting.number, &protocol.votes, labels, &qr, progress)
            .await;
        let signed_voters = signatures.len();
        let company_signed = logo.is_some();

        // Phase 4: Compose
        progress.on_phase_start(&GenerationPhase::Compose, 1);
        let relationships = RelationshipTable::build(company_signed, signatures.keys().copied());
        let document_xml = DocumentComposer::new(ComposeContext {
            meeting,
            company: &company,
            quorum: &quorum,
            items: &minutes,
            votes: &protocol.votes,
            relationships: &relationships,
            options: &options,
        })
        .compose();
        let package = assemble_package(document_xml, &relationships, logo, signatures);
        package
            .validate()
            .map_err(GenerateProtocolError::Composition)?;
        debug!(
            "Composed {} bytes of markup with {} images",
            package.document_xml.len(),
            package.media.len()
        );
        progress.on_task_complete(&GenerationPhase::Compose, "document.xml", true);
        progress.on_phase_complete(&GenerationPhase::Compose);

        // Phase 5: Package
        progress.on_phase_start(&GenerationPhase::Package, 1);
        let bytes = self.writer.write(&package)?;
        progress.on_task_complete(&GenerationPhase::Package, "docx", true);
        progress.on_phase_complete(&GenerationPhase::Package);

        let document = ProtocolDocument::new(&meeting.number, &meeting.building_address, bytes);
        info!(
            "Protocol {} ready: {} bytes, {} of {} voters signed",
            document.file_name,
            document.bytes.len(),
            signed_voters,
            protocol.votes.len()
        );

        let items = minutes
            .iter()
            .enumerate()
            .map(|(offset, m)| ItemOutcome {
                number: FIRST_ITEM_NUMBER + offset,
                title: m.item.title.clone(),
                result: m.result,
            })
            .collect();

        Ok(GenerateProtocolOutput {
            document,
            quorum,
            items,
            company_signed,
            signed_voters,
            fallback_voters: protocol.votes.len() - signed_voters,
        })
    }

    /// Phase 1: Tally every agenda item
    fn phase_tally<'a>(
        protocol: &'a ProtocolInput,
        options: &DocumentOptions,
        progress: &dyn ProgressNotifier,
    ) -> Vec<ItemMinutes<'a>> {
        info!("Phase 1: Tally");
        progress.on_phase_start(&GenerationPhase::Tally, protocol.agenda_items.len());

        let minutes = protocol
            .agenda_items
            .iter()
            .map(|item| {
                let result =
                    compute_item_result(item, protocol.meeting.total_area, options.decision_rule);
                debug!(
                    "Item {}: {:.2}% for, {:.2}% against, {:.2}% abstain, met: {}",
                    item.id,
                    result.percent_for,
                    result.percent_against,
                    result.percent_abstain,
                    result.threshold_met
                );
                progress.on_task_complete(&GenerationPhase::Tally, &item.title, true);
                ItemMinutes {
                    item,
                    result,
                    votes: protocol.votes_for_item(&item.id),
                }
            })
            .collect();

        progress.on_phase_complete(&GenerationPhase::Tally);
        minutes
    }

    /// Phase 2: Render the company verification QR once.
    ///
    /// A profile without a name is skipped; a failed render aborts the run.
    async fn phase_company_signature(
        &self,
        company: &CompanyProfile,
        labels: &Labels,
        qr: &QrOptions,
        progress: &dyn ProgressNotifier,
    ) -> Result<Option<Vec<u8>>, GenerateProtocolError> {
        if !company.is_configured() {
            info!("Phase 2: Company signature skipped (no company profile)");
            return Ok(None);
        }

        info!("Phase 2: Company signature");
        progress.on_phase_start(&GenerationPhase::CompanySignature, 1);

        let payload = company_payload(company, labels);
        let result = render_blocking(Arc::clone(&self.renderer), payload, qr.clone()).await;

        progress.on_task_complete(
            &GenerationPhase::CompanySignature,
            &company.name,
            result.is_ok(),
        );
        progress.on_phase_complete(&GenerationPhase::CompanySignature);

        result
            .map(Some)
            .map_err(GenerateProtocolError::CompanySignature)
    }

    /// Phase 3: Render one receipt QR per voter on a bounded pool.
    ///
    /// Returns the decoded PNG bytes keyed by vote-list position. Failed
    /// voters are absent from the map.
    async fn phase_voter_signatures(
        &self,
        protocol_number: &str,
        votes: &[VoteRecord],
        labels: &Labels,
        qr: &QrOptions,
        progress: &dyn ProgressNotifier,
    ) -> BTreeMap<usize, Vec<u8>> {
        info!(
            "Phase 3: Voter signatures ({} voters, concurrency {})",
            votes.len(),
            self.params.render_concurrency
        );
        progress.on_phase_start(&GenerationPhase::VoterSignatures, votes.len());

        let semaphore = Arc::new(Semaphore::new(self.params.render_concurrency.max(1)));
        let mut join_set = JoinSet::new();

        for (index, vote) in votes.iter().enumerate() {
            let renderer = Arc::clone(&self.renderer);
            let semaphore = Arc::clone(&semaphore);
            let payload = voter_receipt_payload(protocol_number, vote, labels);
            let options = qr.clone();
            let voter = vote.voter_name.clone();

            join_set.spawn(async move {
                let result = match semaphore.acquire_owned().await {
                    Ok(_permit) => render_blocking(renderer, payload, options).await,
                    Err(e) => Err(RenderError::Task(e.to_string())),
                };
                (index, voter, result)
            });
        }

        let mut rendered = BTreeMap::new();

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, voter, Ok(bytes))) => {
                    debug!("Signature #{} rendered for {}", index, voter);
                    progress.on_task_complete(&GenerationPhase::VoterSignatures, &voter, true);
                    rendered.insert(index, bytes);
                }
                Ok((index, voter, Err(e))) => {
                    warn!(
                        "Signature #{} for {} failed, using fallback mark: {}",
                        index, voter, e
                    );
                    progress.on_task_complete(&GenerationPhase::VoterSignatures, &voter, false);
                }
                Err(e) => {
                    warn!("Signature task join error: {}", e);
                }
            }
        }

        progress.on_phase_complete(&GenerationPhase::VoterSignatures);
        rendered
    }
}

/// Render on a blocking thread and decode the base64 output
async fn render_blocking<R: QrRenderer + 'static>(
    renderer: Arc<R>,
    payload: String,
    options: QrOptions,
) -> Result<Vec<u8>, RenderError> {
    let encoded = tokio::task::spawn_blocking(move || renderer.render(&payload, &options))
        .await
        .map_err(|e| RenderError::Task(e.to_string()))??;
    decode_media(&encoded)
}

/// Standard base64 to raw bytes
pub fn decode_media(encoded: &str) -> Result<Vec<u8>, RenderError> {
    base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|e| RenderError::InvalidOutput(e.to_string()))
}

fn assemble_package(
    document_xml: String,
    relationships: &RelationshipTable,
    logo: Option<Vec<u8>>,
    signatures: BTreeMap<usize, Vec<u8>>,
) -> ProtocolPackage {
    let mut media = Vec::with_capacity(relationships.len());

    if let (Some(entry), Some(bytes)) = (relationships.logo_entry(), logo) {
        media.push(MediaEntry::new(entry.target.clone(), bytes));
    }
    for (index, bytes) in signatures {
        if let Some(entry) = relationships.voter_entry(index) {
            media.push(MediaEntry::new(entry.target.clone(), bytes));
        }
    }

    ProtocolPackage::new(
        document_xml,
        relationships.entries().cloned().collect(),
        media,
    )
}
