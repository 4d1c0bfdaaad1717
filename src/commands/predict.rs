//! Predict command: profile and career averages for any player, then an
//! optional recent-games prediction for active players.
//!
//! The run is a fixed sequence of [`Stage`]s. Each stage carries exactly the
//! data gathered so far, so a later stage can't run without its inputs.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::{
    cli::NbaStats,
    commands::{prompt::Prompter, render},
    nba::{
        compute::StatFormula,
        http::StatsClient,
        player::{career_averages, fetch_profile, lookup_player, recent_games},
        types::{Player, Prediction, RecentGamesTable},
    },
    GameCount, Result, StatCode,
};

/// Window, stat and optional threshold for one prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionParams {
    pub games: GameCount,
    pub stat: StatCode,
    pub threshold: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    CollectIdentity,
    ReportProfileAndCareer {
        player: Player,
    },
    DecideProceed {
        player: Player,
    },
    CollectPredictionParams {
        player: Player,
    },
    FetchRecent {
        player: Player,
        params: PredictionParams,
    },
    Predict {
        player: Player,
        params: PredictionParams,
        recent: RecentGamesTable,
    },
    Report {
        player: Player,
        params: PredictionParams,
        prediction: Prediction,
    },
    InactiveNotice {
        player: Player,
    },
    Done,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::CollectIdentity => "collect_identity",
            Stage::ReportProfileAndCareer { .. } => "report_profile_and_career",
            Stage::DecideProceed { .. } => "decide_proceed",
            Stage::CollectPredictionParams { .. } => "collect_prediction_params",
            Stage::FetchRecent { .. } => "fetch_recent",
            Stage::Predict { .. } => "predict",
            Stage::Report { .. } => "report",
            Stage::InactiveNotice { .. } => "inactive_notice",
            Stage::Done => "done",
        }
    }
}

/// Where a run goes once the profile has been shown.
pub fn after_profile(player: Player, stat_requested: bool) -> Stage {
    if player.is_active {
        Stage::DecideProceed { player }
    } else if stat_requested {
        Stage::InactiveNotice { player }
    } else {
        Stage::Done
    }
}

/// Run the whole predictor against `client`, reading answers from `input`
/// and writing everything the user sees to `output`.
pub async fn handle_predict<R: BufRead, W: Write>(
    args: &NbaStats,
    client: &StatsClient,
    input: R,
    output: W,
) -> Result<()> {
    let mut session = Session {
        args,
        client,
        prompter: Prompter::new(input, output),
    };

    let mut stage = Stage::CollectIdentity;
    while !matches!(stage, Stage::Done) {
        debug!(stage = stage.name(), "entering stage");
        stage = session.advance(stage).await?;
    }
    Ok(())
}

struct Session<'a, R, W> {
    args: &'a NbaStats,
    client: &'a StatsClient,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    async fn advance(&mut self, stage: Stage) -> Result<Stage> {
        match stage {
            Stage::CollectIdentity => {
                let name = match &self.args.player {
                    Some(name) => name.clone(),
                    None => self.prompter.ask_player_name()?,
                };
                let player = lookup_player(self.client, &name, self.args.season).await?;
                Ok(Stage::ReportProfileAndCareer { player })
            }

            Stage::ReportProfileAndCareer { player } => {
                self.prompter.say(render::career_header(&player))?;
                let profile = fetch_profile(self.client, &player).await?;
                self.prompter.say(profile.to_string())?;

                let averages = career_averages(self.client, player.id).await?;
                for line in render::career_lines(&averages) {
                    self.prompter.say(line)?;
                }
                Ok(after_profile(player, self.args.stat.is_some()))
            }

            Stage::DecideProceed { player } => {
                if self.prompter.ask_proceed()? {
                    Ok(Stage::CollectPredictionParams { player })
                } else {
                    info!(player = %player.name, "prediction declined");
                    Ok(Stage::Done)
                }
            }

            Stage::CollectPredictionParams { player } => {
                let games = match self.args.games {
                    Some(games) => games,
                    None => self.prompter.ask_game_count()?,
                };
                let stat = match self.args.stat {
                    Some(stat) => stat,
                    None => self.prompter.ask_stat()?,
                };
                let threshold = match self.args.threshold {
                    Some(threshold) => Some(threshold).filter(|t| t.is_finite()),
                    None => self.prompter.ask_threshold(stat)?,
                };
                let params = PredictionParams {
                    games,
                    stat,
                    threshold,
                };
                debug!(?params, "prediction parameters collected");
                Ok(Stage::FetchRecent { player, params })
            }

            Stage::FetchRecent { player, params } => {
                let recent =
                    recent_games(self.client, &player, self.args.season, params.games).await?;
                self.prompter.say(render::recent_games_header(params.games))?;
                self.prompter.say(render::recent_games_table(&recent))?;
                if self.args.show_data {
                    self.prompter.say(serde_json::to_string_pretty(&recent)?)?;
                }
                Ok(Stage::Predict {
                    player,
                    params,
                    recent,
                })
            }

            Stage::Predict {
                player,
                params,
                recent,
            } => {
                let prediction =
                    StatFormula::new(&recent, params.stat, params.threshold).compute()?;
                Ok(Stage::Report {
                    player,
                    params,
                    prediction,
                })
            }

            Stage::Report {
                player,
                params,
                prediction,
            } => {
                info!(
                    player = %player.name,
                    stat = %params.stat,
                    value = prediction.value(),
                    "prediction computed"
                );
                self.prompter.say(render::prediction_line(
                    &player,
                    params.stat,
                    params.games,
                    &prediction,
                ))?;
                Ok(Stage::Done)
            }

            Stage::InactiveNotice { player } => {
                self.prompter.say(render::retired_notice(&player))?;
                Ok(Stage::Done)
            }

            Stage::Done => Ok(Stage::Done),
        }
    }
}
