//! Canonical field keys of the cadastral record
//!
//! [`FieldKey`] is the closed set of output fields of a ficha catastral,
//! serialized as the `SCREAMING_SNAKE_CASE` names consumers key on. The
//! recognizer's label vocabulary is wider than the field set: several labels
//! resolve to one field (e.g. both `DEPARTAMENTO_NOMBRE` and
//! `UBIGEO_DEPARTAMENTO` resolve to [`FieldKey::Departamento`]).
//! [`FieldKey::from_label`] is that many-to-one table.

use serde::{Deserialize, Serialize};

/// Canonical field of the cadastral record.
///
/// Declaration order follows the blocks of the physical form (identification,
/// location, titleholder, fiscal address, titularity, property, construction,
/// complementary works) and is the order fields serialize in, via the derived
/// `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldKey {
    // Bloque 0 - identificación
    NumeroFicha,
    /// CUC, the 12-digit unique property identifier.
    CodigoUnicoCatastral,
    CodigoReferenciaCatastral,
    Departamento,
    Provincia,
    Distrito,
    Sector,
    Manzana,
    Lote,
    Edifica,
    Entrada,
    Piso,
    Unidad,
    /// Dígito de control.
    Dc,
    CodigoContribuyente,
    CodigoPredial,

    // I - ubicación del predio
    CodigoVia,
    TipoVia,
    NombreVia,
    TipoPuerta,
    NumeroMunicipal,
    CondicionNumeracion,
    TipoEdificacion,
    TipoInterior,
    NumeroInterior,
    /// Código de habilitación urbana.
    CodigoHu,
    NombreHabilitacion,
    ZonaSectorEtapa,
    Sublote,

    // II - titular catastral
    TipoTitular,
    EstadoCivil,
    TipoDocIdentidad,
    NumeroDocumento,
    Nombres,
    ApellidoPaterno,
    ApellidoMaterno,
    NumeroRuc,
    RazonSocial,
    PersonaJuridica,

    // III - domicilio fiscal
    DomicilioFiscal,
    DomicilioDepartamento,
    DomicilioProvincia,
    DomicilioDistrito,
    DomicilioVia,
    DomicilioNumero,
    DomicilioInterior,
    DomicilioHu,
    DomicilioHabilitacion,
    DomicilioZona,
    DomicilioManzana,
    DomicilioLote,
    DomicilioSublote,
    Telefono,
    Anexo,
    CorreoElectronico,

    // IV - titularidad
    CondicionTitular,
    FormaAdquisicion,
    FechaAdquisicion,

    // V - descripción del predio
    ClasificacionPredio,
    CodigoUso,
    UsoPredio,
    Zonificacion,
    AreaTerrenoAdquirida,
    AreaTerrenoVerificada,
    MedidaFrente,
    MedidaDerecha,
    MedidaIzquierda,
    MedidaFondo,
    ColindanciaFrente,
    ColindanciaDerecha,
    ColindanciaIzquierda,
    ColindanciaFondo,
    ServicioLuz,
    ServicioAgua,
    ServicioTelefono,
    ServicioDesague,
    ServicioGas,
    ServicioInternet,
    ServicioTv,

    // VI - construcciones
    NumeroPiso,
    FechaConstruccion,
    /// Material estructural predominante.
    Mep,
    /// Estado de conservación.
    Ecs,
    /// Estado de construcción.
    Ecc,
    MurosColumnas,
    Techos,
    Pisos,
    PuertasVentanas,
    Revest,
    Banos,
    Instalaciones,
    AreaVerificada,
    /// Unidad catastral de la construcción.
    Uca,
    PorcentajeBienComun,

    // VII - obras complementarias
    ObraCodigo,
    ObraDescripcion,
    ObraFechaConstruccion,
    ObraMep,
    ObraEcs,
    ObraEcc,
    ObraProductoTotal,
    ObraUnidad,

    // Partial-date spans the recognizer emits on their own; fused into
    // FECHA_CONSTRUCCION by the derivation engine.
    Mes,
    Anio,

    // Derived only - no recognizer label maps here. Synthesized from the
    // DEPARTAMENTO/PROVINCIA/DISTRITO triple via the geographic catalog.
    Ubigeo,
}

impl FieldKey {
    /// Canonical wire name of the field, as serialized in the record.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NumeroFicha => "NUMERO_FICHA",
            Self::CodigoUnicoCatastral => "CODIGO_UNICO_CATASTRAL",
            Self::CodigoReferenciaCatastral => "CODIGO_REFERENCIA_CATASTRAL",
            Self::Departamento => "DEPARTAMENTO",
            Self::Provincia => "PROVINCIA",
            Self::Distrito => "DISTRITO",
            Self::Sector => "SECTOR",
            Self::Manzana => "MANZANA",
            Self::Lote => "LOTE",
            Self::Edifica => "EDIFICA",
            Self::Entrada => "ENTRADA",
            Self::Piso => "PISO",
            Self::Unidad => "UNIDAD",
            Self::Dc => "DC",
            Self::CodigoContribuyente => "CODIGO_CONTRIBUYENTE",
            Self::CodigoPredial => "CODIGO_PREDIAL",
            Self::CodigoVia => "CODIGO_VIA",
            Self::TipoVia => "TIPO_VIA",
            Self::NombreVia => "NOMBRE_VIA",
            Self::TipoPuerta => "TIPO_PUERTA",
            Self::NumeroMunicipal => "NUMERO_MUNICIPAL",
            Self::CondicionNumeracion => "CONDICION_NUMERACION",
            Self::TipoEdificacion => "TIPO_EDIFICACION",
            Self::TipoInterior => "TIPO_INTERIOR",
            Self::NumeroInterior => "NUMERO_INTERIOR",
            Self::CodigoHu => "CODIGO_HU",
            Self::NombreHabilitacion => "NOMBRE_HABILITACION",
            Self::ZonaSectorEtapa => "ZONA_SECTOR_ETAPA",
            Self::Sublote => "SUBLOTE",
            Self::TipoTitular => "TIPO_TITULAR",
            Self::EstadoCivil => "ESTADO_CIVIL",
            Self::TipoDocIdentidad => "TIPO_DOC_IDENTIDAD",
            Self::NumeroDocumento => "NUMERO_DOCUMENTO",
            Self::Nombres => "NOMBRES",
            Self::ApellidoPaterno => "APELLIDO_PATERNO",
            Self::ApellidoMaterno => "APELLIDO_MATERNO",
            Self::NumeroRuc => "NUMERO_RUC",
            Self::RazonSocial => "RAZON_SOCIAL",
            Self::PersonaJuridica => "PERSONA_JURIDICA",
            Self::DomicilioFiscal => "DOMICILIO_FISCAL",
            Self::DomicilioDepartamento => "DOMICILIO_DEPARTAMENTO",
            Self::DomicilioProvincia => "DOMICILIO_PROVINCIA",
            Self::DomicilioDistrito => "DOMICILIO_DISTRITO",
            Self::DomicilioVia => "DOMICILIO_VIA",
            Self::DomicilioNumero => "DOMICILIO_NUMERO",
            Self::DomicilioInterior => "DOMICILIO_INTERIOR",
            Self::DomicilioHu => "DOMICILIO_HU",
            Self::DomicilioHabilitacion => "DOMICILIO_HABILITACION",
            Self::DomicilioZona => "DOMICILIO_ZONA",
            Self::DomicilioManzana => "DOMICILIO_MANZANA",
            Self::DomicilioLote => "DOMICILIO_LOTE",
            Self::DomicilioSublote => "DOMICILIO_SUBLOTE",
            Self::Telefono => "TELEFONO",
            Self::Anexo => "ANEXO",
            Self::CorreoElectronico => "CORREO_ELECTRONICO",
            Self::CondicionTitular => "CONDICION_TITULAR",
            Self::FormaAdquisicion => "FORMA_ADQUISICION",
            Self::FechaAdquisicion => "FECHA_ADQUISICION",
            Self::ClasificacionPredio => "CLASIFICACION_PREDIO",
            Self::CodigoUso => "CODIGO_USO",
            Self::UsoPredio => "USO_PREDIO",
            Self::Zonificacion => "ZONIFICACION",
            Self::AreaTerrenoAdquirida => "AREA_TERRENO_ADQUIRIDA",
            Self::AreaTerrenoVerificada => "AREA_TERRENO_VERIFICADA",
            Self::MedidaFrente => "MEDIDA_FRENTE",
            Self::MedidaDerecha => "MEDIDA_DERECHA",
            Self::MedidaIzquierda => "MEDIDA_IZQUIERDA",
            Self::MedidaFondo => "MEDIDA_FONDO",
            Self::ColindanciaFrente => "COLINDANCIA_FRENTE",
            Self::ColindanciaDerecha => "COLINDANCIA_DERECHA",
            Self::ColindanciaIzquierda => "COLINDANCIA_IZQUIERDA",
            Self::ColindanciaFondo => "COLINDANCIA_FONDO",
            Self::ServicioLuz => "SERVICIO_LUZ",
            Self::ServicioAgua => "SERVICIO_AGUA",
            Self::ServicioTelefono => "SERVICIO_TELEFONO",
            Self::ServicioDesague => "SERVICIO_DESAGUE",
            Self::ServicioGas => "SERVICIO_GAS",
            Self::ServicioInternet => "SERVICIO_INTERNET",
            Self::ServicioTv => "SERVICIO_TV",
            Self::NumeroPiso => "NUMERO_PISO",
            Self::FechaConstruccion => "FECHA_CONSTRUCCION",
            Self::Mep => "MEP",
            Self::Ecs => "ECS",
            Self::Ecc => "ECC",
            Self::MurosColumnas => "MUROS_COLUMNAS",
            Self::Techos => "TECHOS",
            Self::Pisos => "PISOS",
            Self::PuertasVentanas => "PUERTAS_VENTANAS",
            Self::Revest => "REVEST",
            Self::Banos => "BANOS",
            Self::Instalaciones => "INSTALACIONES",
            Self::AreaVerificada => "AREA_VERIFICADA",
            Self::Uca => "UCA",
            Self::PorcentajeBienComun => "PORCENTAJE_BIEN_COMUN",
            Self::ObraCodigo => "OBRA_CODIGO",
            Self::ObraDescripcion => "OBRA_DESCRIPCION",
            Self::ObraFechaConstruccion => "OBRA_FECHA_CONSTRUCCION",
            Self::ObraMep => "OBRA_MEP",
            Self::ObraEcs => "OBRA_ECS",
            Self::ObraEcc => "OBRA_ECC",
            Self::ObraProductoTotal => "OBRA_PRODUCTO_TOTAL",
            Self::ObraUnidad => "OBRA_UNIDAD",
            Self::Mes => "MES",
            Self::Anio => "ANIO",
            Self::Ubigeo => "UBIGEO",
        }
    }

    /// Resolve a recognizer label to its canonical field.
    ///
    /// The table is many-to-one: model labels that name the same field under
    /// a different vocabulary (ASR-era label extensions, abbreviations like
    /// `DNI`/`RUC`, the `UBIGEO_*`/`*_NOMBRE` location pairs) all land on one
    /// key. Labels outside the table return `None` and stay visible only in
    /// the record's audit span list. `UBIGEO` itself is never produced by a
    /// label; it is derived.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let key = match label {
            // Bloque 0 - identificación
            "NUMERO_FICHA" => Self::NumeroFicha,
            "CODIGO_CATASTRAL" => Self::CodigoUnicoCatastral,
            "CODIGO_REFERENCIA_CATASTRAL" => Self::CodigoReferenciaCatastral,
            "UBIGEO_DEPARTAMENTO" | "DEPARTAMENTO_NOMBRE" => Self::Departamento,
            "UBIGEO_PROVINCIA" | "PROVINCIA_NOMBRE" => Self::Provincia,
            "UBIGEO_DISTRITO" | "DISTRITO_NOMBRE" => Self::Distrito,
            "SECTOR" => Self::Sector,
            "MANZANA" => Self::Manzana,
            "LOTE" => Self::Lote,
            "EDIFICA" => Self::Edifica,
            "ENTRADA" => Self::Entrada,
            "PISO" => Self::Piso,
            "UNIDAD" => Self::Unidad,
            "DC" => Self::Dc,
            "CODIGO_CONTRIBUYENTE" => Self::CodigoContribuyente,
            "CODIGO_PREDIAL" => Self::CodigoPredial,

            // I - ubicación del predio
            "CODIGO_VIA" => Self::CodigoVia,
            "TIPO_VIA" => Self::TipoVia,
            "NOMBRE_VIA" => Self::NombreVia,
            "TIPO_PUERTA" => Self::TipoPuerta,
            "NUMERO_MUNICIPAL" => Self::NumeroMunicipal,
            "CONDICION_NUMERACION" => Self::CondicionNumeracion,
            "TIPO_EDIFICACION" => Self::TipoEdificacion,
            "TIPO_INTERIOR" => Self::TipoInterior,
            "NUMERO_INTERIOR" => Self::NumeroInterior,
            "CODIGO_HU" => Self::CodigoHu,
            "NOMBRE_HABILITACION" | "HABILITACION_URBANA" => Self::NombreHabilitacion,
            "ZONA" => Self::ZonaSectorEtapa,
            "SUBLOTE" => Self::Sublote,

            // II - titular catastral
            "TIPO_TITULAR" => Self::TipoTitular,
            "ESTADO_CIVIL" => Self::EstadoCivil,
            "TIPO_DOC" => Self::TipoDocIdentidad,
            "DNI" => Self::NumeroDocumento,
            "NOMBRES" => Self::Nombres,
            "APELLIDO_PATERNO" => Self::ApellidoPaterno,
            "APELLIDO_MATERNO" => Self::ApellidoMaterno,
            "RUC" => Self::NumeroRuc,
            "RAZON_SOCIAL" => Self::RazonSocial,
            "PERSONA_JURIDICA" => Self::PersonaJuridica,

            // III - domicilio fiscal
            "DOMICILIO_FISCAL" => Self::DomicilioFiscal,
            "DOMICILIO_DEPARTAMENTO" => Self::DomicilioDepartamento,
            "DOMICILIO_PROVINCIA" => Self::DomicilioProvincia,
            "DOMICILIO_DISTRITO" => Self::DomicilioDistrito,
            "DOMICILIO_VIA" => Self::DomicilioVia,
            "DOMICILIO_NUMERO" => Self::DomicilioNumero,
            "DOMICILIO_INTERIOR" => Self::DomicilioInterior,
            "DOMICILIO_HU" => Self::DomicilioHu,
            "DOMICILIO_HABILITACION" => Self::DomicilioHabilitacion,
            "DOMICILIO_ZONA" => Self::DomicilioZona,
            "DOMICILIO_MANZANA" => Self::DomicilioManzana,
            "DOMICILIO_LOTE" => Self::DomicilioLote,
            "DOMICILIO_SUBLOTE" => Self::DomicilioSublote,
            "TELEFONO" => Self::Telefono,
            "ANEXO" => Self::Anexo,
            "CORREO" => Self::CorreoElectronico,

            // IV - titularidad
            "CONDICION_TITULAR" => Self::CondicionTitular,
            "FORMA_ADQUISICION" => Self::FormaAdquisicion,
            "FECHA_ADQUISICION" => Self::FechaAdquisicion,

            // V - descripción del predio
            "CLASIFICACION_PREDIO" => Self::ClasificacionPredio,
            "CODIGO_USO" => Self::CodigoUso,
            "USO_PREDIO" => Self::UsoPredio,
            "ZONIFICACION" => Self::Zonificacion,
            "AREA_TERRENO_ADQUIRIDA" => Self::AreaTerrenoAdquirida,
            "AREA_TERRENO_VERIFICADA" => Self::AreaTerrenoVerificada,
            "MEDIDA_FRENTE" => Self::MedidaFrente,
            "MEDIDA_DERECHA" => Self::MedidaDerecha,
            "MEDIDA_IZQUIERDA" => Self::MedidaIzquierda,
            "MEDIDA_FONDO" => Self::MedidaFondo,
            "COLINDANCIA_FRENTE" | "COLINDANTE_FRENTE" => Self::ColindanciaFrente,
            "COLINDANCIA_DERECHA" | "COLINDANTE_DERECHA" => Self::ColindanciaDerecha,
            "COLINDANCIA_IZQUIERDA" | "COLINDANTE_IZQUIERDA" => Self::ColindanciaIzquierda,
            "COLINDANCIA_FONDO" | "COLINDANTE_FONDO" => Self::ColindanciaFondo,
            "SERVICIO_LUZ" => Self::ServicioLuz,
            "SERVICIO_AGUA" => Self::ServicioAgua,
            "SERVICIO_TELEFONO" => Self::ServicioTelefono,
            "SERVICIO_DESAGUE" => Self::ServicioDesague,
            "SERVICIO_GAS" => Self::ServicioGas,
            "SERVICIO_INTERNET" => Self::ServicioInternet,
            "SERVICIO_TV" => Self::ServicioTv,

            // VI - construcciones
            "NUMERO_PISO" => Self::NumeroPiso,
            "FECHA_CONSTRUCCION" => Self::FechaConstruccion,
            "MEP" => Self::Mep,
            "ECS" => Self::Ecs,
            "ECC" => Self::Ecc,
            "MUROS_COLUMNAS" => Self::MurosColumnas,
            "TECHOS" => Self::Techos,
            "PISOS" => Self::Pisos,
            "PUERTAS_VENTANAS" => Self::PuertasVentanas,
            "REVEST" => Self::Revest,
            "BANOS" => Self::Banos,
            "INSTALACIONES" => Self::Instalaciones,
            "AREA_CONSTRUIDA" => Self::AreaVerificada,
            "UCA" => Self::Uca,
            "PORCENTAJE_BIEN_COMUN" => Self::PorcentajeBienComun,

            // VII - obras complementarias
            "OBRA_CODIGO" => Self::ObraCodigo,
            "OBRA_DESCRIPCION" => Self::ObraDescripcion,
            "OBRA_FECHA_CONSTRUCCION" => Self::ObraFechaConstruccion,
            "OBRA_MEP" => Self::ObraMep,
            "OBRA_ECS" => Self::ObraEcs,
            "OBRA_ECC" => Self::ObraEcc,
            "OBRA_PRODUCTO_TOTAL" => Self::ObraProductoTotal,
            "OBRA_UNIDAD" => Self::ObraUnidad,

            // Partial dates from the ASR-era label set
            "MES" => Self::Mes,
            "ANIO" => Self::Anio,

            _ => return None,
        };
        Some(key)
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
