use std::io;

/// Total length of a Borderlands profile.bin file. Fixed, no length
/// prefix, no versioning.
pub const TOTAL_LENGTH: usize = 197;

/// Length of the SHA-1 digest stored at the head of the file.
pub const DIGEST_LENGTH: usize = 20;

/// Offset of the mouse sensitivity byte. Always inside `BODY`.
pub const SENSITIVITY_OFFSET: usize = 0x9e;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// Bytes holding the stored digest.
pub const DIGEST: ByteRange = ByteRange {
    start: 0,
    end: DIGEST_LENGTH,
};

/// Bytes the digest is computed over: everything after the digest.
pub const BODY: ByteRange = ByteRange {
    start: DIGEST_LENGTH,
    end: TOTAL_LENGTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Digest,
    LeadingBody,
    Sensitivity,
    TrailingBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    pub id: SectionId,
    pub range: ByteRange,
}

#[derive(Debug, Clone)]
pub struct FileLayout {
    pub file_len: usize,
    pub sections: Vec<SectionLayout>,
}

impl FileLayout {
    pub fn validate(&self) -> io::Result<()> {
        let Some(first) = self.sections.first() else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "profile layout must contain at least one section",
            ));
        };

        if first.range.start != 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "profile layout does not start at byte 0",
            ));
        }

        let mut expected = 0usize;
        for section in &self.sections {
            if section.range.start != expected {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "layout gap/overlap around section {:?}: expected start {}, got {}",
                        section.id, expected, section.range.start
                    ),
                ));
            }
            if section.range.end < section.range.start {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "invalid section range {:?}: {}..{}",
                        section.id, section.range.start, section.range.end
                    ),
                ));
            }
            expected = section.range.end;
        }

        if expected != self.file_len {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "layout does not cover file: ended at {}, file length {}",
                    expected, self.file_len
                ),
            ));
        }

        Ok(())
    }
}

/// The fixed section map of profile.bin. The two body sections around
/// the sensitivity byte are opaque; only their extent matters.
pub fn profile_layout() -> FileLayout {
    FileLayout {
        file_len: TOTAL_LENGTH,
        sections: vec![
            SectionLayout {
                id: SectionId::Digest,
                range: DIGEST,
            },
            SectionLayout {
                id: SectionId::LeadingBody,
                range: ByteRange {
                    start: BODY.start,
                    end: SENSITIVITY_OFFSET,
                },
            },
            SectionLayout {
                id: SectionId::Sensitivity,
                range: ByteRange {
                    start: SENSITIVITY_OFFSET,
                    end: SENSITIVITY_OFFSET + 1,
                },
            },
            SectionLayout {
                id: SectionId::TrailingBody,
                range: ByteRange {
                    start: SENSITIVITY_OFFSET + 1,
                    end: TOTAL_LENGTH,
                },
            },
        ],
    }
}
