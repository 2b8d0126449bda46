//! Built-in physics corpus used when no corpus store is available

use crate::models::{Corpus, KnowledgeChunk};

const LIGHT: &str = "Light - Reflection and Refraction";
const ELECTRICITY: &str = "Electricity";
const MAGNETISM: &str = "Magnetic Effects of Electric Current";

/// `(text, subtopic, chapter)` for every default chunk, in corpus order.
const DEFAULT_CHUNKS: &[(&str, &str, &str)] = &[
    (
        "Light is a form of energy which enables us to see objects. We see objects when light emitted or reflected by them reaches our eyes. Light travels in straight lines. This can be observed from the fact that a small source of light casts sharp shadows of opaque objects. The straight-line path of light is called a ray of light.",
        "Nature of Light",
        LIGHT,
    ),
    (
        "When light falls on a surface, it can be reflected, absorbed, or transmitted. The phenomenon of bouncing back of light rays from a surface is called reflection. Laws of reflection: (1) The incident ray, reflected ray and normal all lie in the same plane. (2) The angle of incidence is equal to the angle of reflection (∠i = ∠r).",
        "Reflection of Light",
        LIGHT,
    ),
    (
        "A spherical mirror is a mirror whose reflecting surface is part of a sphere. There are two types: Concave mirror (converging mirror) - curves inward, can form real and virtual images. Convex mirror (diverging mirror) - curves outward, always forms virtual, diminished images. The focal length f = R/2, where R is radius of curvature.",
        "Spherical Mirrors",
        LIGHT,
    ),
    (
        "Mirror formula: 1/v + 1/u = 1/f, where v = image distance, u = object distance, f = focal length. Magnification m = -v/u = height of image/height of object. For concave mirrors, focal length is positive; for convex mirrors, focal length is negative.",
        "Mirror Formula",
        LIGHT,
    ),
    (
        "Refraction is the bending of light when it travels from one transparent medium to another. This happens due to change in speed of light in different media. Laws of refraction: (1) Incident ray, refracted ray and normal lie in the same plane. (2) Snell's law: n₁sin(θ₁) = n₂sin(θ₂), where n is refractive index.",
        "Refraction of Light",
        LIGHT,
    ),
    (
        "A lens is a transparent object with at least one curved surface that can converge or diverge light rays. Convex lens (converging lens) - thicker at center, focal length positive, can form real and virtual images. Concave lens (diverging lens) - thinner at center, focal length negative, always forms virtual images.",
        "Lenses",
        LIGHT,
    ),
    (
        "Lens formula: 1/v - 1/u = 1/f. Power of lens P = 1/f (in meters), measured in diopters (D). For combination of lenses: P = P₁ + P₂ + ... The human eye works like a camera with a convex lens (crystalline lens) forming real, inverted images on retina.",
        "Lens Formula and Human Eye",
        LIGHT,
    ),
    (
        "Electric current is the flow of electric charge through a conductor. SI unit is ampere (A). One ampere = 1 coulomb/second. Current flows from positive terminal to negative terminal (conventional current direction). In metals, current is due to flow of free electrons (opposite to conventional current).",
        "Electric Current",
        ELECTRICITY,
    ),
    (
        "Electric potential difference (voltage) is the work done per unit charge to move charge between two points. V = W/Q. SI unit is volt (V). One volt = 1 joule/coulomb. Potential difference drives current through a circuit. Higher voltage means more energy per unit charge.",
        "Electric Potential",
        ELECTRICITY,
    ),
    (
        "Ohm's Law states that current through a conductor is directly proportional to potential difference across it, provided temperature remains constant. V = I × R, where V = voltage, I = current, R = resistance. Resistance opposes flow of current. SI unit of resistance is ohm (Ω).",
        "Ohm's Law",
        ELECTRICITY,
    ),
    (
        "Factors affecting resistance: (1) Length - R ∝ l (2) Area of cross-section - R ∝ 1/A (3) Material - depends on resistivity ρ (4) Temperature - for conductors, R increases with temperature. Formula: R = ρl/A. Resistivity is a material property.",
        "Resistance",
        ELECTRICITY,
    ),
    (
        "Series combination: Resistances add up, Rs = R₁ + R₂ + R₃... Current same through all resistors. Parallel combination: 1/Rp = 1/R₁ + 1/R₂ + 1/R₃... Voltage same across all resistors. Parallel combination gives less total resistance than individual resistances.",
        "Resistor Combinations",
        ELECTRICITY,
    ),
    (
        "Electric power is the rate of consumption of electric energy. P = VI = I²R = V²/R. SI unit is watt (W). Electric energy consumed = P × t = VIt. Commercial unit of energy is kilowatt-hour (kWh). 1 kWh = 3.6 × 10⁶ J. Electric bill is based on energy consumed.",
        "Electric Power",
        ELECTRICITY,
    ),
    (
        "A magnetic field exists around a magnet and current-carrying conductor. Magnetic field lines are imaginary lines showing direction of magnetic field. They emerge from North pole and enter South pole. Field lines never intersect. Uniform field has parallel, equally spaced lines.",
        "Magnetic Field",
        MAGNETISM,
    ),
    (
        "Current-carrying conductor produces magnetic field. Direction given by Right Hand Thumb Rule: Thumb shows current direction, fingers curl in direction of magnetic field. For circular loop: field lines are circular near wire, straight at center. For solenoid: behaves like bar magnet.",
        "Magnetic Field due to Current",
        MAGNETISM,
    ),
    (
        "Force on current-carrying conductor in magnetic field: F = BIl sin θ, where B = magnetic field, I = current, l = length, θ = angle. Direction by Fleming's Left Hand Rule: Thumb = Force, Index finger = Field, Middle finger = Current. Used in electric motors.",
        "Force on Current-carrying Conductor",
        MAGNETISM,
    ),
    (
        "Electromagnetic induction: When magnetic flux through a conductor changes, EMF is induced. Faraday's laws: (1) Changing magnetic flux induces EMF. (2) Induced EMF = -dΦ/dt. Fleming's Right Hand Rule gives direction of induced current. Used in generators, transformers.",
        "Electromagnetic Induction",
        MAGNETISM,
    ),
];

/// The Class 10 physics corpus covering light, electricity and magnetism.
pub fn default_corpus() -> Corpus {
    DEFAULT_CHUNKS
        .iter()
        .map(|&(text, subtopic, chapter)| KnowledgeChunk::new(text, subtopic, chapter))
        .collect()
}
