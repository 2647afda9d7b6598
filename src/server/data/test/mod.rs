mod doctor;
mod owner;
mod pet;
mod service;
mod visit;
