mod admin;
mod game;
