pub(crate) mod pino;

pub(crate) use pino::PinoUseCase;
