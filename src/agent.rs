//! Agent profile - the registration the host needs at startup.
//!
//! The host owns the conversation, the prompt and the model call. This crate
//! only describes the agent ([`AgentProfile`]) and the tools it may call,
//! bundled as a [`Manifest`].

use serde::{Deserialize, Serialize};

use crate::tools::{ToolDefinition, ToolRunner};

const DEFAULT_INSTRUCTION: &str = "\
You are a helpful assistant that knows everything about meteors.
Your job is to teach the user about meteors, meteorites, asteroids, comets and meteor showers.
Use the 'getPhotos' tool to find pictures that illustrate your answers.
Use the 'sample' tool if you need to check that tools are reachable.";

/// Agent registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentProfile {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_description")]
    pub description: String,

    /// System instruction text
    #[serde(default = "default_instruction")]
    pub instruction: String,

    /// Model identifier the host should use
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_name() -> String {
    "Meteor".to_string()
}

fn default_description() -> String {
    "You know everything about Meteors".to_string()
}

fn default_instruction() -> String {
    DEFAULT_INSTRUCTION.to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

impl Default for AgentProfile {
    fn default() -> Self {
        Self {
            name: default_name(),
            description: default_description(),
            instruction: default_instruction(),
            model: default_model(),
        }
    }
}

/// Profile as sent to the host, with the bound tool names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentEntry {
    #[serde(flatten)]
    pub profile: AgentProfile,
    pub tools: Vec<String>,
}

/// Everything the host needs to register the agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub agent: AgentEntry,
    pub tools: Vec<ToolDefinition>,
}

impl Manifest {
    pub fn new(profile: &AgentProfile, runner: &ToolRunner) -> Self {
        Self {
            agent: AgentEntry {
                profile: profile.clone(),
                tools: runner.tool_names().into_iter().map(String::from).collect(),
            },
            tools: runner.definitions(),
        }
    }
}
