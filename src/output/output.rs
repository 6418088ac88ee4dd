use super::encoder::Encoder;
use super::writer::Writer;
use crate::error::Result;
use crate::model::Metric;

pub struct Output {
    writer: Box<dyn Writer>,
    encoder: Box<dyn Encoder>,
}

impl Output {
    pub fn new(writer: Box<dyn Writer>, encoder: Box<dyn Encoder>) -> Self {
        Self { writer, encoder }
    }

    pub fn write(&mut self, metric: &Metric) -> Result<()> {
        let buf = self.encoder.encode(metric)?;

        self.writer
            .write(&buf)
            .map_err(|e| ("writer failed", e))?;

        Ok(())
    }
}
