pub mod launch_agent;
pub mod prompter;
pub mod remover;
pub mod scanner;
pub mod stripper;
