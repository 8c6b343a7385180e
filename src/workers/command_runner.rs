use std::future::Future;
use std::time::Instant;
use tokio::sync::oneshot;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{SeolyzerError, SeolyzerResult};
use crate::helpers::url_helper::{format_url, is_valid_url};
use crate::logger::animated_logger::AnimatedLogger;
use crate::logger::report_printer::ReportPrinter;
use crate::services::lead_client::LeadClient;
use crate::services::staged_auditor::StagedAuditor;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::lead_data::LeadData;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
async fn interrupted() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

impl CommandRunner {
    pub const fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> SeolyzerResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Analyze { url, json, no_stage } => self.analyze_command(&url, json, no_stage).await,
            Commands::Lead { name, email, phone, company, source } => {
                let mut lead = LeadData::new(name, email, phone);
                lead.company = company;
                lead.source = source;
                self.lead_command(&lead).await
            }
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> SeolyzerResult<()> {
        log::info!("🚀 Initializing seolyzer configuration...");
        let path = ConfigManager::create_sample_config()?;
        println!("✅ Configuration written to {}", path.display());
        println!("🔧 Run 'seolyzer validate' to check it.");
        Ok(())
    }

    fn validate_command(&self) -> SeolyzerResult<()> {
        let config = ConfigManager::load()?;
        let result = ConfigManager::validate_config(&config);
        result.print_summary();

        if result.is_valid {
            Ok(())
        } else {
            Err(SeolyzerError::config_error(
                &format!("{} configuration errors", result.errors.len()),
                None,
            ))
        }
    }

    async fn analyze_command(&self, input: &str, json: bool, no_stage: bool) -> SeolyzerResult<()> {
        if !is_valid_url(input) {
            return Err(SeolyzerError::InvalidUrl(input.to_string()));
        }
        let url = format_url(input);

        let config = ConfigManager::load()?;
        let auditor = StagedAuditor::from_config(&config)?;

        let result = if json || no_stage {
            Self::run_quiet(&auditor, &url, no_stage).await?
        } else {
            Self::run_staged(&auditor, &url, interrupted(), |interim| ReportPrinter::print(interim, false)).await?
        };

        if json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            ReportPrinter::print(&result, true);
        }

        Ok(())
    }

    async fn run_quiet(auditor: &StagedAuditor, url: &str, no_stage: bool) -> SeolyzerResult<AnalysisResult> {
        if no_stage {
            tokio::select! {
                () = interrupted() => Err(SeolyzerError::Cancelled),
                result = auditor.full_audit(url) => result,
            }
        } else {
            auditor.run_until(url, |_| {}, interrupted()).await
        }
    }

    /// Shows a spinner per stage and hands the interim result to
    /// `show_interim` once the fast audit is in, even when enrichment
    /// completes in the same poll.
    async fn run_staged<C, R>(
        auditor: &StagedAuditor,
        url: &str,
        cancel: C,
        mut show_interim: R,
    ) -> SeolyzerResult<AnalysisResult>
    where
        C: Future<Output = ()> + Send,
        R: FnMut(&AnalysisResult),
    {
        let (interim_tx, mut interim_rx) = oneshot::channel();
        let audit = auditor.run_until(
            url,
            move |interim| {
                let _ = interim_tx.send(interim);
            },
            cancel,
        );
        tokio::pin!(audit);

        let mut logger = AnimatedLogger::new(format!("Analyserar {}", url));
        logger.start();

        let result = tokio::select! {
            result = &mut audit => {
                if let Ok(interim) = interim_rx.try_recv() {
                    logger.stop("PageSpeed-analys klar").await;
                    show_interim(&interim);
                }
                result
            }
            Ok(interim) = &mut interim_rx => {
                logger.stop("PageSpeed-analys klar").await;
                show_interim(&interim);

                logger = AnimatedLogger::new("Hämtar AI-insikter".to_string());
                logger.start();
                (&mut audit).await
            }
        };

        match &result {
            Ok(_) => logger.stop("Analys klar").await,
            Err(_) => logger.error("Analysen misslyckades").await,
        }

        result
    }

    async fn lead_command(&self, lead: &LeadData) -> SeolyzerResult<()> {
        lead.validate()?;

        let config = ConfigManager::load()?;
        let client = LeadClient::new(&config.leads, ConfigManager::leads_api_key(&config))?;
        client.submit(lead).await?;

        println!("✅ Tack! Dina uppgifter har skickats.");
        Ok(())
    }
}
